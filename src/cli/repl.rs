//! The read-eval-print loop.

use super::session::{Reply, Session};
use crate::clock::Clock;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Read commands from `reader` until `exit`/`close` or end of input,
/// writing every reply to `writer`.
///
/// Only I/O failures end the loop early; command failures are printed.
pub async fn run<C, R, W>(session: &mut Session<C>, mut reader: R, mut writer: W) -> Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", WELCOME).as_bytes()).await?;
    let mut buf = Vec::new();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, leaving");
            writer
                .write_all(format!("\n{}\n", super::handlers::FAREWELL).as_bytes())
                .await?;
            break;
        }

        let line = decode_line(&buf);

        match session.execute(&line) {
            None => continue,
            Some(Reply::Continue(text)) => {
                writer.write_all(format!("{}\n", text).as_bytes()).await?;
            }
            Some(Reply::Exit(text)) => {
                writer.write_all(format!("{}\n", text).as_bytes()).await?;
                break;
            }
        }
    }

    writer.flush().await?;
    Ok(())
}

/// Strip the line ending and decode, replacing invalid UTF-8 sequences.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => line.to_string(),
        Err(e) => {
            warn!(error = %e, "Input line is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}

//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{cli, Config, Session};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep the conversation on stdout clean)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.as_str())
        .unwrap_or("error");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.birthday_window_days,
        "Starting contact book"
    );

    let mut session = Session::new(config);
    cli::run(&mut session, BufReader::new(stdin()), stdout()).await?;

    info!(
        contacts = session.book().len(),
        "Contact book closed, in-memory data discarded"
    );
    Ok(())
}

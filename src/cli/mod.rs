//! Interactive command-line surface.
//!
//! - **parser**: splits a line into a [`Command`] and its arguments
//! - **handlers**: one function per command, returning the text to print
//! - **session**: owns the contact book and dispatches parsed commands
//! - **repl**: the line-reading loop used by the binary

pub mod handlers;
pub mod parser;
pub mod repl;
pub mod session;

pub use parser::{parse_line, Command, ParsedLine};
pub use repl::run;
pub use session::{Reply, Session};

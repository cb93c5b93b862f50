//! Contact Book - an interactive command-line assistant for contacts.
//!
//! Stores names, phone numbers and birthdays in memory, validates every value
//! on entry, and lists the contacts to congratulate in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record built from those values
//! - **book**: The contact book and the upcoming-birthday query
//! - **matching**: Fuzzy name and exact phone lookup for `find`
//! - **cli**: Command parsing, handlers and the REPL loop
//! - **clock**: Source of "today" so date queries are testable
//! - **config**: Optional settings from environment variables
//! - **error**: Error types for book, command and configuration failures

pub mod book;
pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use book::{AddOutcome, ContactBook, UpcomingBirthday};
pub use cli::{Command, Reply, Session};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use matching::{ContactMatcher, MatchResult};
pub use models::ContactRecord;

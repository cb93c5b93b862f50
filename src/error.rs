//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value object validation errors live in [`crate::domain::ValidationError`] and are
//! wrapped here when they surface through a book or command operation.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when reading or mutating the contact book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value failed format validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record exists under this name
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    /// The phone to edit is not in the record
    #[error("Phone number {0} not found in the record")]
    PhoneNotFound(String),

    /// The record has no phone numbers to operate on
    #[error("Contact {0} has no phone numbers")]
    NoPhones(String),
}

/// Errors that can occur while executing a REPL command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given too few arguments
    #[error("Invalid arguments for '{command}'. Usage: {usage}")]
    InvalidArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl CommandError {
    /// The raw user input behind a validation failure, if that is the cause.
    pub fn rejected_input(&self) -> Option<&str> {
        match self {
            CommandError::Book(BookError::Validation(err)) => err.input(),
            _ => None,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

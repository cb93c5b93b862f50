//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that failed validation, if any.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::EmptyName => None,
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) => Some(raw),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "Invalid phone number format"),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(
            ValidationError::InvalidPhone("123".into()).to_string(),
            "Invalid phone number format"
        );
        assert_eq!(
            ValidationError::InvalidBirthday("1990-01-01".into()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
    }

    #[test]
    fn test_input_is_kept_for_logging() {
        let err = ValidationError::InvalidPhone("12ab".into());
        assert_eq!(err.input(), Some("12ab"));
        assert_eq!(ValidationError::EmptyName.input(), None);
    }
}

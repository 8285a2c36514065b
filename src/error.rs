//! Custom error types for Pocket Metrics
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Income validation failures are ordinary
//! values (see [`crate::models::ValidationError`]); they only become a
//! `PocketError` when a command has to give up because of them.

use thiserror::Error;

use crate::models::income::ValidationError;
use crate::models::rule::RuleError;

/// The main error type for Pocket Metrics operations
#[derive(Error, Debug)]
pub enum PocketError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Income input was rejected by the validator
    #[error("{0}")]
    Validation(ValidationError),

    /// An allocation rule could not be built from the given percentages
    #[error("Invalid rule: {0}")]
    InvalidRule(#[from] RuleError),

    /// Malformed command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PocketError {
    /// Check if this is an income validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation error behind this error, if any
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for PocketError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocket Metrics operations
pub type PocketResult<T> = Result<T, PocketError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::income::ValidationErrorCode;

    #[test]
    fn test_error_display() {
        let err = PocketError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error_is_shown_verbatim() {
        let err: PocketError = ValidationError::new(ValidationErrorCode::TooLarge).into();
        assert_eq!(err.to_string(), "Salary must be less than 1,000,000");
        assert!(err.is_validation());
        assert_eq!(
            err.validation_error().map(|e| e.code()),
            Some(ValidationErrorCode::TooLarge)
        );
    }

    #[test]
    fn test_rule_error_display() {
        let err: PocketError = RuleError::Unbalanced { total: 90 }.into();
        assert_eq!(
            err.to_string(),
            "Invalid rule: percentages must add up to 100, got 90"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let pocket_err: PocketError = io_err.into();
        assert!(matches!(pocket_err, PocketError::Io(_)));
    }
}

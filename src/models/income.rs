//! Net income validation
//!
//! Raw income comes from free-form entry (a text field or a command line
//! argument). Validation checks, in order, that the value is a finite number,
//! that something was entered at all, that it is positive, and that it does
//! not exceed [`MAX_INCOME`]. The first failing check wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted net income
pub const MAX_INCOME: f64 = 1_000_000.0;

/// Machine-readable validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorCode {
    NotANumber,
    Required,
    NotPositive,
    TooLarge,
}

impl ValidationErrorCode {
    /// User-facing message for this failure
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotANumber => "Salary must be a number",
            Self::Required => "Salary is required",
            Self::NotPositive => "Salary must be positive number",
            Self::TooLarge => "Salary must be less than 1,000,000",
        }
    }

    /// Stable identifier, e.g. `NOT_POSITIVE`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotANumber => "NOT_A_NUMBER",
            Self::Required => "REQUIRED",
            Self::NotPositive => "NOT_POSITIVE",
            Self::TooLarge => "TOO_LARGE",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rejected income value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    code: ValidationErrorCode,
    message: &'static str,
}

impl ValidationError {
    pub const fn new(code: ValidationErrorCode) -> Self {
        Self {
            code,
            message: code.message(),
        }
    }

    pub const fn code(&self) -> ValidationErrorCode {
        self.code
    }

    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// An income that passed validation: finite, positive and at most [`MAX_INCOME`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ValidIncome(f64);

impl ValidIncome {
    /// The validated amount, unchanged from the input
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ValidIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate free-form income text
///
/// Only `None` and the empty string are `REQUIRED`. Whitespace-only text
/// counts as zero and is `NOT_POSITIVE`; text that does not parse as a finite
/// number is `NOT_A_NUMBER`. Surrounding whitespace is ignored.
pub fn validate_income(raw: Option<&str>) -> Result<ValidIncome, ValidationError> {
    let text = match raw {
        None | Some("") => return Err(ValidationError::new(ValidationErrorCode::Required)),
        Some(text) => text.trim(),
    };

    if text.is_empty() {
        return validate_amount(0.0);
    }

    match text.parse::<f64>() {
        Ok(value) => validate_amount(value),
        Err(_) => Err(ValidationError::new(ValidationErrorCode::NotANumber)),
    }
}

/// Validate a numeric income
pub fn validate_amount(value: f64) -> Result<ValidIncome, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(ValidationErrorCode::NotANumber));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(ValidationErrorCode::NotPositive));
    }
    if value > MAX_INCOME {
        return Err(ValidationError::new(ValidationErrorCode::TooLarge));
    }
    Ok(ValidIncome(value))
}

//! Salary form state
//!
//! Wraps the income validator with the field's trigger policy: the field is
//! untouched until it is first edited or loses focus, and from then on every
//! change re-validates. An untouched field shows no message. A failing edit
//! keeps the last accepted salary.

use crate::models::{validate_income, ValidIncome, ValidationError, ValidationErrorCode};

use super::widgets::TextInput;

/// State of the net salary input
#[derive(Debug, Clone, Default)]
pub struct SalaryForm {
    pub input: TextInput,
    touched: bool,
    error: Option<ValidationError>,
    income: Option<ValidIncome>,
}

impl SalaryForm {
    pub fn new() -> Self {
        Self {
            input: TextInput::new()
                .label("€")
                .placeholder("Enter your net salary"),
            ..Self::default()
        }
    }

    /// Use a different currency symbol as the field prefix
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.input.label = symbol.to_string();
        self
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Message to show under the field, if any
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// The last value that passed validation
    pub fn income(&self) -> Option<ValidIncome> {
        self.income
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.input.insert(c);
        self.on_change();
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
        self.on_change();
    }

    pub fn delete(&mut self) {
        self.input.delete();
        self.on_change();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.on_change();
    }

    /// The field lost focus
    pub fn on_blur(&mut self) {
        self.touched = true;
        self.revalidate();
    }

    fn on_change(&mut self) {
        self.touched = true;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        if !self.touched {
            self.error = None;
            return;
        }

        match validate_income(Some(self.input.value())) {
            Ok(income) => {
                self.error = None;
                if self.income != Some(income) {
                    tracing::debug!(income = income.value(), "net salary accepted");
                }
                self.income = Some(income);
            }
            Err(err) => {
                if err.code() != ValidationErrorCode::Required {
                    tracing::debug!(code = %err.code(), "net salary rejected");
                }
                self.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut SalaryForm, text: &str) {
        for c in text.chars() {
            form.insert(c);
        }
    }

    #[test]
    fn test_untouched_form_shows_nothing() {
        let form = SalaryForm::new();
        assert!(!form.is_touched());
        assert!(form.error().is_none());
        assert!(form.income().is_none());
    }

    #[test]
    fn test_blur_on_empty_field_requires_salary() {
        let mut form = SalaryForm::new();
        form.on_blur();
        assert_eq!(
            form.error().map(|e| e.message()),
            Some("Salary is required")
        );
    }

    #[test]
    fn test_typing_validates_each_change() {
        let mut form = SalaryForm::new();
        type_text(&mut form, "-");
        assert_eq!(form.error().map(|e| e.code()), Some(ValidationErrorCode::NotANumber));

        type_text(&mut form, "1");
        assert_eq!(form.error().map(|e| e.code()), Some(ValidationErrorCode::NotPositive));
        assert!(form.income().is_none());

        form.clear();
        type_text(&mut form, "10000");
        assert!(form.error().is_none());
        assert_eq!(form.income().map(|i| i.value()), Some(10000.0));
    }

    #[test]
    fn test_invalid_edit_keeps_last_salary() {
        let mut form = SalaryForm::new();
        type_text(&mut form, "200000");
        assert_eq!(form.income().map(|i| i.value()), Some(200000.0));

        type_text(&mut form, "0");
        assert_eq!(
            form.error().map(|e| e.message()),
            Some("Salary must be less than 1,000,000")
        );
        assert_eq!(form.income().map(|i| i.value()), Some(200000.0));

        form.clear();
        assert_eq!(form.error().map(|e| e.code()), Some(ValidationErrorCode::Required));
        assert_eq!(form.income().map(|i| i.value()), Some(200000.0));
    }

    #[test]
    fn test_deleting_everything_requires_salary() {
        let mut form = SalaryForm::new();
        type_text(&mut form, "5");
        form.backspace();
        assert_eq!(form.error().map(|e| e.code()), Some(ValidationErrorCode::Required));
    }
}

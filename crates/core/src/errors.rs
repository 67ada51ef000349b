//! Core error types for the ritase calculation engine.
//!
//! Persistence and transport live outside this crate, so everything here is
//! either rejected input reported back to the caller or a calculator-level
//! fault. Zero-denominator cases are not errors: the services substitute 0 or
//! "N/A" and surface a warning instead (see the returns module).

use thiserror::Error;

use crate::calculator::WizardStep;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Every violated field of one input, not just the first.
    #[error("invalid fields: {}", fields_summary(.0))]
    Fields(Vec<FieldViolation>),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

fn fields_summary(fields: &[FieldViolation]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that occur while driving a calculator record through the wizard.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("step '{}' requires completing step '{}' first", .attempted.label(), .missing.label())]
    StepOrder {
        attempted: WizardStep,
        missing: WizardStep,
    },

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Accumulates field violations so an input is validated in full before the
/// first failure is reported.
#[derive(Debug, Default)]
pub struct Violations {
    fields: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(ValidationError::Fields(self.fields)))
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violations_collects_all_fields() {
        let mut violations = Violations::new();
        violations.push("quantity", "must be at least 1");
        violations.push("financing_tenor_months", "must be at least 1");

        let err = violations.into_result().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("quantity"));
        assert!(message.contains("financing_tenor_months"));
    }

    #[test]
    fn test_empty_violations_is_ok() {
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn test_error_converts_to_short_message() {
        let err = Error::Validation(ValidationError::MissingField("customer_id".to_string()));
        let message: String = err.into();
        assert_eq!(
            message,
            "Input validation failed: Required field 'customer_id' is missing"
        );
    }
}

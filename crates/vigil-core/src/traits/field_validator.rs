use crate::models::{ValidationRequest, ValidationResult};

/// Validates one field value into a structured verdict.
///
/// Malformed input is never an error: it yields an invalid result with issues.
pub trait IFieldValidator: Send + Sync {
    fn validate(&self, request: &ValidationRequest) -> ValidationResult;
}

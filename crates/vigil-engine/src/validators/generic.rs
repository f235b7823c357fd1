use vigil_core::constants::GENERIC_VALID_THRESHOLD;
use vigil_core::{FieldKind, Score, ValidationResult};

use super::Verdict;

/// Presence check for fields with no specific rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericValidator;

impl GenericValidator {
    pub fn check(&self, raw: &str) -> Verdict {
        let result = if raw.trim().is_empty() {
            ValidationResult::from_confidence(FieldKind::Generic, Score::ZERO, GENERIC_VALID_THRESHOLD)
                .with_issue("Value is required")
        } else {
            ValidationResult::from_confidence(FieldKind::Generic, Score::MAX, GENERIC_VALID_THRESHOLD)
        };
        Verdict::recorded(result)
    }
}

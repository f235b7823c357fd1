use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FieldKind, Score, ValidationResult};

/// One past validation. Holds a digest of the input, never the raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Utc>,
    pub field_kind: FieldKind,
    /// blake3 hex digest of the raw input.
    pub input_digest: String,
    pub valid: bool,
    pub confidence: Score,
}

impl HistoryRecord {
    /// Create a record for `raw_value` with the timestamp set to now.
    pub fn new(field_kind: FieldKind, raw_value: &str, valid: bool, confidence: Score) -> Self {
        Self {
            timestamp: Utc::now(),
            field_kind,
            input_digest: Self::digest(raw_value),
            valid,
            confidence,
        }
    }

    /// Create a record from a finalized result.
    pub fn from_result(raw_value: &str, result: &ValidationResult) -> Self {
        Self::new(
            result.kind(),
            raw_value,
            result.is_valid(),
            result.confidence(),
        )
    }

    pub fn digest(raw_value: &str) -> String {
        blake3::hash(raw_value.as_bytes()).to_hex().to_string()
    }
}

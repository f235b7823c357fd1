use serde::{Deserialize, Serialize};

use crate::models::FieldKind;

/// A single value to validate, with its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub field_kind: FieldKind,
    pub raw_value: String,
}

impl ValidationRequest {
    pub fn new(field_kind: FieldKind, raw_value: impl Into<String>) -> Self {
        Self {
            field_kind,
            raw_value: raw_value.into(),
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::FieldKind;

/// Field-name to field-kind mapping extensions.
///
/// Overrides are consulted only for names the built-in mapping sends to
/// `Generic`; `email`, `phone`, `message`, `comment` and `description` always
/// keep their built-in kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub overrides: BTreeMap<String, FieldKind>,
}

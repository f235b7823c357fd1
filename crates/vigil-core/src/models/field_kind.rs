use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a form field. Decides which checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Email,
    Phone,
    /// Free-form user text, routed through content moderation.
    FreeText,
    /// Person name.
    Name,
    Generic,
}

impl FieldKind {
    /// Infer the kind from a form field name using the built-in mapping.
    ///
    /// `email` and `phone` map to themselves, `message`, `comment` and
    /// `description` to `FreeText`; everything else is `Generic`.
    pub fn from_field_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "message" | "comment" | "description" => Self::FreeText,
            _ => Self::Generic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::FreeText => "free_text",
            Self::Name => "name",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

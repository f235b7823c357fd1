use std::fmt;

use serde::{Deserialize, Serialize};

/// What a rule is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    SqlInjection,
    Xss,
    Spam,
    Profanity,
    SuspiciousIdentifier,
    Repetition,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 6] = [
        Self::SqlInjection,
        Self::Xss,
        Self::Spam,
        Self::Profanity,
        Self::SuspiciousIdentifier,
        Self::Repetition,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SqlInjection => "sql_injection",
            Self::Xss => "xss",
            Self::Spam => "spam",
            Self::Profanity => "profanity",
            Self::SuspiciousIdentifier => "suspicious_identifier",
            Self::Repetition => "repetition",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which kind of input a rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    /// Free text and whole addresses: injection, spam, profanity.
    Text,
    /// Short identifiers: email local parts, person names.
    Identifier,
    /// Digit strings left after phone normalization.
    Phone,
}

impl RuleScope {
    /// Scope a custom rule lands in when only its category is known.
    pub fn default_for(category: RuleCategory) -> Self {
        match category {
            RuleCategory::SuspiciousIdentifier | RuleCategory::Repetition => Self::Identifier,
            _ => Self::Text,
        }
    }
}

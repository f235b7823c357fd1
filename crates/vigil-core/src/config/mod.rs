pub mod defaults;
mod fields_config;
mod history_config;
mod observability_config;
mod rules_config;
mod suggestion_config;

pub use fields_config::FieldsConfig;
pub use history_config::HistoryConfig;
pub use observability_config::ObservabilityConfig;
pub use rules_config::{CustomRuleConfig, RulesConfig};
pub use suggestion_config::SuggestionConfig;

use serde::{Deserialize, Serialize};

/// Top-level Vigil configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub history: HistoryConfig,
    pub suggestion: SuggestionConfig,
    pub rules: RulesConfig,
    pub fields: FieldsConfig,
    pub observability: ObservabilityConfig,
}

impl VigilConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

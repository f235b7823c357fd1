use serde::{Deserialize, Serialize};

use super::defaults;

/// Typo suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Largest edit distance at which a trusted domain is still suggested.
    pub max_distance: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_distance: defaults::DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

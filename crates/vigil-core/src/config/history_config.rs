use serde::{Deserialize, Serialize};

use super::defaults;

/// Validation history configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of records retained before FIFO eviction.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::HistoryRecord;

/// Aggregates over the validation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_validations: usize,
    /// Share of valid outcomes, in percent (0–100).
    pub success_rate: f64,
    pub average_confidence: f64,
    pub most_recent: HistoryRecord,
}

/// Result of a stats query. `NoData` is returned for an empty history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatsReport {
    NoData,
    Summary(Stats),
}

impl StatsReport {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn summary(&self) -> Option<&Stats> {
        match self {
            Self::NoData => None,
            Self::Summary(stats) => Some(stats),
        }
    }
}

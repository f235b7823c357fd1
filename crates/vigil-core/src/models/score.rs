use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{SCORE_MAX, SCORE_MIN};

/// Confidence or risk score clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(SCORE_MIN);
    pub const MAX: Score = Score(SCORE_MAX);

    /// Create a new Score, saturating to [0, 100]. NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(SCORE_MIN, SCORE_MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The complementary score, `100 - self`.
    pub fn inverse(self) -> Self {
        Self::new(SCORE_MAX - self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self::new(value as f64)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

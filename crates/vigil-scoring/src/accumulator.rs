//! Weighted signal accumulation.
//!
//! Weights are integers and are summed before the single clamp, so the
//! result does not depend on signal order.

use vigil_core::Score;

/// One scoring input. Absent signals contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub label: String,
    pub weight: i32,
    pub present: bool,
}

impl Signal {
    pub fn new(label: impl Into<String>, weight: i32, present: bool) -> Self {
        Self {
            label: label.into(),
            weight,
            present,
        }
    }

    /// A signal that always applies.
    pub fn present(label: impl Into<String>, weight: i32) -> Self {
        Self::new(label, weight, true)
    }
}

/// How a score was reached: the base, each applied signal and the clamped total.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub base: i32,
    /// Unclamped sum of the base and every present weight.
    pub raw: i64,
    pub score: Score,
    pub applied: Vec<(String, i32)>,
}

impl Breakdown {
    /// Whether clamping changed the raw sum.
    pub fn was_clamped(&self) -> bool {
        self.score.value() != self.raw as f64
    }
}

pub struct ScoreAccumulator;

impl ScoreAccumulator {
    /// `clamp(base + Σ present weights, 0, 100)`.
    pub fn accumulate(base: i32, signals: &[Signal]) -> Score {
        Score::from(raw_sum(base, signals))
    }

    /// Same as [`accumulate`](Self::accumulate), keeping the applied signals.
    pub fn explain(base: i32, signals: &[Signal]) -> Breakdown {
        let raw = raw_sum(base, signals);
        let applied = signals
            .iter()
            .filter(|s| s.present && s.weight != 0)
            .map(|s| (s.label.clone(), s.weight))
            .collect();
        Breakdown {
            base,
            raw,
            score: Score::from(raw),
            applied,
        }
    }
}

fn raw_sum(base: i32, signals: &[Signal]) -> i64 {
    signals
        .iter()
        .filter(|s| s.present)
        .fold(i64::from(base), |acc, s| acc + i64::from(s.weight))
}

//! # vigil-core
//!
//! Foundation crate for the Vigil validation engine.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::{RuleError, VigilError, VigilResult};
pub use models::{
    FieldKind, HistoryRecord, RuleCategory, RuleScope, Score, Sentiment, SentimentLabel, Stats, StatsReport,
    ValidationRequest, ValidationResult,
};

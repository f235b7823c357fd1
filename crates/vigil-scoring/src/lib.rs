//! # vigil-scoring
//!
//! Turns rule matches and text measurements into clamped scores.
//!
//! - [`ScoreAccumulator`]: integer sum of weighted signals, clamped once.
//! - [`entropy`]: Shannon entropy over characters.
//! - [`text_stats`]: uppercase share and link counting.
//! - [`SuggestionEngine`]: typo-map and edit-distance domain corrections.
//! - [`SentimentHeuristic`]: word-list sentiment with a profanity penalty.

pub mod accumulator;
pub mod entropy;
pub mod sentiment;
pub mod suggestion;
pub mod text_stats;

pub use accumulator::{Breakdown, ScoreAccumulator, Signal};
pub use sentiment::SentimentHeuristic;
pub use suggestion::SuggestionEngine;

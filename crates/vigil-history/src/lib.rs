//! # vigil-history
//!
//! Keeps the last N validation outcomes and summarizes them.

mod tracker;

pub use tracker::HistoryTracker;

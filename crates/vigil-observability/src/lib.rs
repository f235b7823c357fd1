//! # vigil-observability
//!
//! Structured logging for the Vigil workspace: subscriber setup, span
//! constructors and the named events other crates emit.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter, spans};

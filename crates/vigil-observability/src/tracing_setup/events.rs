//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use vigil_core::FieldKind;

/// Log orchestrator construction.
pub fn engine_initialized(rule_count: usize, history_capacity: usize) {
    tracing::info!(
        event = "engine_initialized",
        version = vigil_core::constants::VERSION,
        rule_count = rule_count,
        history_capacity = history_capacity,
        "validation engine initialized"
    );
}

/// Log the outcome of one validation.
pub fn validation_completed(kind: FieldKind, valid: bool, score: f64, issue_count: usize) {
    tracing::debug!(
        event = "validation_completed",
        kind = %kind,
        valid = valid,
        score = score,
        issue_count = issue_count,
        "validation completed"
    );
}

/// Log content that moderation rejected.
pub fn content_rejected(risk: f64, flagged: &[&str]) {
    tracing::info!(
        event = "content_rejected",
        risk = risk,
        flagged = ?flagged,
        "content rejected"
    );
}

/// Log a completed form batch.
pub fn form_validated(field_count: usize, invalid_count: usize) {
    tracing::debug!(
        event = "form_validated",
        field_count = field_count,
        invalid_count = invalid_count,
        "form validated"
    );
}

/// Log the eviction of the oldest history record.
pub fn history_evicted(capacity: usize) {
    tracing::debug!(
        event = "history_evicted",
        capacity = capacity,
        "oldest history record evicted"
    );
}

mod rule_error;

pub use rule_error::RuleError;

/// Top-level error for Vigil.
///
/// Only raised while building an engine; per-call input problems are reported
/// inside a `ValidationResult`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("rule set error: {0}")]
    RuleError(#[from] RuleError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("history capacity must be at least 1, got {capacity}")]
    InvalidCapacity { capacity: usize },
}

pub type VigilResult<T> = Result<T, VigilError>;

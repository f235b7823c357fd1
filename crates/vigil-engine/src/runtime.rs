//! Process-wide orchestrator.
//!
//! Stored behind `OnceLock`: initialized once via [`initialize`] and read via
//! [`get`] for the lifetime of the process.

use std::sync::{Arc, OnceLock};

use vigil_core::{VigilConfig, VigilError, VigilResult};

use crate::engine::ValidationOrchestrator;

/// Global singleton.
static RUNTIME: OnceLock<Arc<ValidationOrchestrator>> = OnceLock::new();

/// Install logging and build the global orchestrator. Fails if it is already
/// initialized or the configuration is invalid.
pub fn initialize(config: VigilConfig) -> VigilResult<Arc<ValidationOrchestrator>> {
    if RUNTIME.get().is_some() {
        return Err(VigilError::ConfigError("runtime already initialized".into()));
    }
    vigil_observability::init_tracing(&config.observability);
    let engine = Arc::new(ValidationOrchestrator::new(config)?);
    // A concurrent initializer may have won the race; report it the same way.
    RUNTIME
        .set(Arc::clone(&engine))
        .map_err(|_| VigilError::ConfigError("runtime already initialized".into()))?;
    tracing::info!("vigil runtime initialized");
    Ok(engine)
}

/// The global orchestrator.
pub fn get() -> VigilResult<Arc<ValidationOrchestrator>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(|| VigilError::ConfigError("runtime not initialized".into()))
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

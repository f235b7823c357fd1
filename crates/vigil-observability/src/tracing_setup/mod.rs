//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use vigil_core::config::ObservabilityConfig;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "VIGIL_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `VIGIL_LOG` wins over `config.log_level` when set. Output is JSON unless
/// `config.json` is false. Only the first call has any effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json);
    });
}

/// Install the global subscriber with an explicit filter (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), true));
}

fn install(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    // Another subscriber may already be installed by the host; keep it.
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if installed.is_err() {
        tracing::debug!("global subscriber already set, keeping it");
    }
}

//! Tracing setup: structured logging with span definitions.

pub mod spans;

use tracing_subscriber::EnvFilter;

use profnet_core::config::ObservabilityConfig;
use profnet_core::errors::{ProfnetError, ProfnetResult};

/// Environment variable consulted before the configured log level.
pub const LOG_ENV_VAR: &str = "PROFNET_LOG";

/// Install the global tracing subscriber.
///
/// `PROFNET_LOG` wins over `config.log_level` when set. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> ProfnetResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> ProfnetResult<()> {
    install(EnvFilter::new(filter), false)
}

fn install(filter: EnvFilter, json: bool) -> ProfnetResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| ProfnetError::ConfigError(format!("tracing init failed: {e}")))
}

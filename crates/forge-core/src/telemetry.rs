//! Tracing subscriber installation

use tracing_subscriber::EnvFilter;

use crate::config::{ForgeConfig, LogFormat};
use crate::error::{ForgeError, Result};

/// Filter from `RUST_LOG`, falling back to `directives`
pub fn env_filter(directives: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(directives)
            .map_err(|err| ForgeError::invalid_log_filter(directives, err)),
    }
}

/// Install a global `fmt` subscriber with a text format
///
/// Returns `Ok(false)` when a global subscriber was already set; calling
/// this more than once is harmless.
pub fn init_tracing(filter: &str) -> Result<bool> {
    install(filter, LogFormat::Text)
}

/// Install a global subscriber as described by `config`
pub fn init_from_config(config: &ForgeConfig) -> Result<bool> {
    install(&config.log_filter, config.log_format)
}

fn install(directives: &str, format: LogFormat) -> Result<bool> {
    let filter = env_filter(directives)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    match installed {
        Ok(()) => Ok(true),
        Err(err) => {
            tracing::debug!(%err, "global subscriber already installed");
            Ok(false)
        }
    }
}

//! Logging setup.
//!
//! The library itself only emits `tracing` events. Binaries and test harnesses
//! embedding it call [`init_logging`] once to install a subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigResult, LogConfig, Validate};
use crate::error::config::ConfigError;

/// Initialize the logging system from a [`LogConfig`].
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
///
/// # Returns
///
/// * `Ok(())` if the global subscriber was installed
/// * `Err(ConfigError)` if the configuration is invalid or a global
///   subscriber is already installed
pub fn init_logging(config: &LogConfig) -> ConfigResult<()> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError::ValidationError(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed
        .map_err(|e| ConfigError::Other(format!("Failed to set global tracing subscriber: {e}")))
}

//! Tracing subscriber setup for host applications.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// ## Summary
/// Builds the env filter for the configured level. `RUST_LOG` wins when set.
///
/// ## Errors
/// Returns an error if the level is not a valid filter directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(&config.level)?)
}

/// ## Summary
/// Installs a global fmt subscriber.
///
/// ## Errors
/// Returns an error if the filter is invalid or a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    tracing::debug!(level = %config.level, "Logging initialized");
    Ok(())
}

//! Structured logging setup

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize JSON tracing output filtered by the configured log level
///
/// An unparsable level falls back to `info`. Calling this again after a
/// global subscriber is installed leaves the existing one in place.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for exporters that can
/// fail to start.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = &config.service.log_level;

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    } else {
        tracing::debug!(
            service = %config.service.name,
            "Global subscriber already installed, keeping it"
        );
    }

    Ok(())
}

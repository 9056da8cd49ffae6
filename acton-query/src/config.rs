//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `ACTON_QUERY_`, `__` separates nested keys)
//! 2. A TOML file (`./config.toml`, or the path given to [`Config::load_from`])
//! 3. Default values
//!
//! ```toml
//! [service]
//! name = "catalog"
//! log_level = "debug"
//!
//! [pagination]
//! max_items_per_page = 50
//! ```
//!
//! The same settings from the environment:
//!
//! ```text
//! ACTON_QUERY_SERVICE__LOG_LEVEL=debug
//! ACTON_QUERY_PAGINATION__MAX_ITEMS_PER_PAGE=50
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::handlers::{QueryLimits, MAX_ITEMS_PER_PAGE};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ACTON_QUERY_";

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Query pagination limits
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, reported in logs
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Pagination limits applied by collection handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Largest page size a query may request
    #[serde(default = "default_max_items_per_page")]
    pub max_items_per_page: u64,
}

impl PaginationConfig {
    /// Limits for [`CollectionQueryHandler::with_limits`](crate::handlers::CollectionQueryHandler::with_limits)
    #[must_use]
    pub const fn limits(&self) -> QueryLimits {
        QueryLimits::new(self.max_items_per_page)
    }
}

fn default_service_name() -> String {
    "acton-query".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_max_items_per_page() -> u64 {
    MAX_ITEMS_PER_PAGE
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_items_per_page: default_max_items_per_page(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, `./config.toml` and the environment
    ///
    /// A missing file is skipped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a source cannot be parsed or the
    /// result is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from defaults, the given TOML file and the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a source cannot be parsed or the
    /// result is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading configuration");

        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The provider stack used by [`Config::load_from`]
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Load from config file (if exists)
            .merge(Toml::file(path))
            // Override with environment variables
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validate(&self) -> Result<()> {
        if self.pagination.max_items_per_page == 0 {
            return Err(figment::Error::from(
                "pagination.max_items_per_page must be a positive integer".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service.name, "acton-query");
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.pagination.max_items_per_page, MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.pagination, PaginationConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config(
            r#"
            [service]
            name = "catalog"

            [pagination]
            max_items_per_page = 25
            "#,
        );

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.service.name, "catalog");
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.pagination.limits(), QueryLimits::new(25));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let (_dir, path) = write_config("[pagination]\nmax_items_per_page = 0\n");
        let error = Config::load_from(&path).unwrap_err();
        assert!(matches!(error, crate::Error::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let (_dir, path) = write_config("[pagination]\nmax_items_per_page = \"many\"\n");
        assert!(matches!(
            Config::load_from(&path),
            Err(crate::Error::Config(_))
        ));
    }
}

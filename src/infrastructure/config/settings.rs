//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Configuration is loaded from a TOML
//! file; the route service base URL can be overridden with
//! `FLIGHTDECK_SERVICE_URL`.
//!
//! # Example
//!
//! ```no_run
//! use flightdeck::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("flightdeck.toml")?;
//!     config.init_logging()?;
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use super::service::{ClockConfig, ServiceConfig, SERVICE_URL_ENV};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Route planning service location.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Clock overlay settings.
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Parse configuration from TOML content. Environment overrides are not
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for an unreadable or invalid file, or an invalid
    /// override.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production). Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVICE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.service.base_url = url.trim().to_string();
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for an empty base URL and
    /// [`ConfigError::InvalidValue`] for one that is not an absolute
    /// `http`/`https` URL.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.service.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    ///
    /// # Errors
    ///
    /// See [`LoggingConfig::init`].
    pub fn init_logging(&self) -> Result<()> {
        self.logging.init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ClockZone;
    use crate::error::Error;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.clock.zone, ClockZone::Utc);
    }

    #[test]
    fn override_replaces_base_url() {
        let mut config = Config::default();
        config.apply_overrides(|key| {
            (key == SERVICE_URL_ENV).then(|| " https://planner.example ".to_string())
        });
        assert_eq!(config.service.base_url, "https://planner.example");
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|_| Some("   ".to_string()));
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = Config::parse_toml("[service]\nbase_url = \"ftp://planner\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "base_url",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_base_url() {
        let result = Config::parse_toml("[service]\nbase_url = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "base_url" }))
        ));
    }

    #[test]
    fn parses_local_clock_zone() {
        let config = Config::parse_toml("[clock]\nzone = \"local\"\n").unwrap();
        assert_eq!(config.clock.zone, ClockZone::Local);
    }
}

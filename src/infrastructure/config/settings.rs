//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to its defaults. Telegram credentials never appear here, they
//! are read from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
//!
//! # Example
//!
//! ```no_run
//! use surgewatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::connection::ConnectionConfig;
use super::detector::DetectorConfig;
use super::heartbeat::HeartbeatConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::binance::settings::BinanceConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Exchange endpoints and kline interval.
    #[serde(default)]
    pub binance: BinanceConfig,

    /// Sharding, rotation and reconnect settings.
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Surge threshold.
    #[serde(default)]
    pub detector: DetectorConfig,

    #[serde(default)]
    pub heartbeat: HeartbeatConfig,

    /// Telegram notification switches.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        validate_url("ws_url", &self.binance.ws_url, &["ws", "wss"])?;
        validate_url("api_url", &self.binance.api_url, &["http", "https"])?;

        if self.binance.kline_interval.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "kline_interval",
            }
            .into());
        }
        if self.binance.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.connection.max_symbols_per_connection == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_symbols_per_connection",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.connection.rotation_period_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rotation_period_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.connection.reconnect_backoff_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "reconnect_backoff_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.connection.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let threshold = self.detector.surge_threshold_percent;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "surge_threshold_percent",
                reason: "must be a positive number".to_string(),
            }
            .into());
        }

        if self.heartbeat.enabled && self.heartbeat.period_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "period_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str, schemes: &[&str]) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }

    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;

    if !schemes.contains(&url.scheme()) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme `{}`", url.scheme()),
        }
        .into());
    }

    Ok(())
}

use chrono::format::{Item, StrftimeItems};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
const MAX_FRACTION_DIGITS: u8 = 6;
const MAX_NOTICE_SECONDS: u64 = 3600;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/product-catalog/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("product-catalog").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Tick rate and notice duration are non-zero; the notice lasts at most an hour
    /// - Currency fraction digits stay within a sane range
    /// - The date pattern is a valid strftime pattern
    /// - The log level is a known level name
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if self.ui.notice_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.notice_seconds must be greater than 0".to_string(),
            });
        }

        if self.ui.notice_seconds > MAX_NOTICE_SECONDS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.notice_seconds must be at most {}, got {}",
                    MAX_NOTICE_SECONDS, self.ui.notice_seconds
                ),
            });
        }

        if self.currency.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "currency.fraction_digits must be at most {}, got {}",
                    MAX_FRACTION_DIGITS, self.currency.fraction_digits
                ),
            });
        }

        if StrftimeItems::new(&self.date.format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid date.format pattern '{}'", self.date.format),
            });
        }

        let level = self.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Unknown log level '{}' (expected one of: {})",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

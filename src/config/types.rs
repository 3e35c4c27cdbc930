use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub date: DateConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal UI behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between tick events in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long the "product added" notice stays visible (default: 3).
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
    /// Ask before deleting a product (default: true).
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

/// How prices are rendered. Defaults follow Indonesian Rupiah: `Rp 1.000,00`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u8,
}

/// How creation timestamps are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateConfig {
    /// strftime pattern, applied in local time.
    #[serde(default = "default_date_format")]
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notice_seconds() -> u64 {
    3
}

fn default_confirm_delete() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "Rp".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_fraction_digits() -> u8 {
    2
}

fn default_date_format() -> String {
    "%d %b %Y, %H:%M".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notice_seconds: default_notice_seconds(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            fraction_digits: default_fraction_digits(),
        }
    }
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            format: default_date_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

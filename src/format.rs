//! Currency and date rendering for the product list.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::config::{CurrencyConfig, DateConfig};

const OVERFLOW_LABEL: &str = "overflow";

/// Render an amount as `<symbol> <grouped integer><decimal sep><fraction>`,
/// e.g. `Rp 1.234.500,00`.
///
/// Amounts too large for `f64` render as `<symbol> overflow`.
pub fn format_currency(amount: f64, currency: &CurrencyConfig) -> String {
    if !amount.is_finite() {
        return if currency.symbol.is_empty() {
            OVERFLOW_LABEL.to_string()
        } else {
            format!("{} {}", currency.symbol, OVERFLOW_LABEL)
        };
    }
    let digits = usize::from(currency.fraction_digits);
    let fixed = format!("{:.*}", digits, amount.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    if !currency.symbol.is_empty() {
        out.push_str(&currency.symbol);
        out.push(' ');
    }
    out.push_str(&group_thousands(integer, &currency.thousands_separator));
    if let Some(fraction) = fraction {
        out.push_str(&currency.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a creation timestamp in local time.
///
/// Falls back to RFC 3339 if the configured pattern cannot be rendered.
pub fn format_date(timestamp: &DateTime<Utc>, date: &DateConfig) -> String {
    let local = timestamp.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(&date.format)).is_err() {
        return timestamp.to_rfc3339();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rupiah_defaults() {
        let currency = CurrencyConfig::default();
        assert_eq!(format_currency(1000.0, &currency), "Rp 1.000,00");
        assert_eq!(format_currency(5.5, &currency), "Rp 5,50");
        assert_eq!(format_currency(1234567.891, &currency), "Rp 1.234.567,89");
        assert_eq!(format_currency(0.0, &currency), "Rp 0,00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        let currency = CurrencyConfig::default();
        assert_eq!(format_currency(-1500.0, &currency), "-Rp 1.500,00");
        assert_eq!(format_currency(-0.001, &currency), "Rp 0,00");
    }

    #[test]
    fn zero_fraction_digits_drops_decimal_part() {
        let currency = CurrencyConfig {
            symbol: "$".into(),
            thousands_separator: ",".into(),
            decimal_separator: ".".into(),
            fraction_digits: 0,
        };
        assert_eq!(format_currency(999999.4, &currency), "$ 999,999");
    }

    #[test]
    fn non_finite_amount_renders_overflow_label() {
        let currency = CurrencyConfig::default();
        assert_eq!(format_currency(1e308 * 2.0, &currency), "Rp overflow");
        assert_eq!(format_currency(f64::NAN, &currency), "Rp overflow");
    }

    #[test]
    fn date_uses_configured_pattern() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap();
        let date = DateConfig {
            format: "%Y".into(),
        };
        assert_eq!(format_date(&timestamp, &date), "2024");
    }

    #[test]
    fn broken_pattern_falls_back_to_rfc3339() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap();
        let date = DateConfig {
            format: "%Q".into(),
        };
        assert_eq!(format_date(&timestamp, &date), "2024-03-09T10:30:00+00:00");
    }
}

// Helpers for amounts expressed in minor units (cents)

use crate::models::currency::Currency;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("invalid amount: {0}")]
    Invalid(String),
    #[error("amount out of range: {0}")]
    OutOfRange(String),
}

pub fn format_amount(amount: i64, currency: Option<&Currency>) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let value = format!("{}{}.{:02}", sign, abs / 100, abs % 100);

    match currency {
        Some(currency) => format!("{} {}", currency.code(), value),
        None => value,
    }
}

/// Parses `"$1,234.56"`, `"ARS 10.5"`, `"US$ 3"` or `"-3"` into minor units.
///
/// Only a leading currency code and `$` symbol and `,` grouping are
/// stripped; anything else that is not a plain decimal number is rejected.
pub fn parse_amount(raw: &str) -> Result<i64, MoneyError> {
    let number = raw
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_uppercase())
        .trim_start_matches('$')
        .trim_start();
    let cleaned = number.replace(',', "");

    let digits = cleaned.strip_prefix('-').unwrap_or(&cleaned);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(MoneyError::Invalid(raw.to_string()));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| MoneyError::Invalid(raw.to_string()))?;
    let minor = (value * 100.0).round();

    if !minor.is_finite() || minor > i64::MAX as f64 || minor < i64::MIN as f64 {
        return Err(MoneyError::OutOfRange(raw.to_string()));
    }

    Ok(minor as i64)
}

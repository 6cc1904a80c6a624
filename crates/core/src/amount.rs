//! SWIFT amount and value-date helpers.
//!
//! FIN amounts use a comma as the decimal separator, and the comma is always
//! present (`100,00`, `100,`). Value dates are 6-digit `YYMMDD`. These
//! helpers convert between the wire text and [`Decimal`] / [`NaiveDate`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced by amount and value-date conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// The amount text is not digits with a single comma decimal separator.
    #[error("invalid amount {value:?}: {reason}")]
    InvalidAmount {
        /// The rejected amount text.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The value date is not a valid `YYMMDD` calendar date.
    #[error("invalid value date {value:?}: expected YYMMDD")]
    InvalidDate {
        /// The rejected date text.
        value: String,
    },
}

/// Format a decimal as a FIN amount.
///
/// The decimal separator becomes a comma and is emitted even for whole
/// amounts (`100` → `"100,"`). The caller supplies a non-negative amount;
/// FIN amounts carry no sign.
pub fn format_amount(amount: &Decimal) -> String {
    let s = amount.to_string();
    match s.split_once('.') {
        Some((int, frac)) => format!("{int},{frac}"),
        None => format!("{s},"),
    }
}

/// Parse a FIN amount into a decimal.
pub fn parse_amount(s: &str) -> Result<Decimal, AmountError> {
    let Some((int, frac)) = s.split_once(',') else {
        return Err(AmountError::InvalidAmount {
            value: s.to_string(),
            reason: "missing comma decimal separator",
        });
    };
    if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidAmount {
            value: s.to_string(),
            reason: "integer part must be one or more digits",
        });
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidAmount {
            value: s.to_string(),
            reason: "fractional part must be digits",
        });
    }
    let normalized = if frac.is_empty() {
        int.to_string()
    } else {
        format!("{int}.{frac}")
    };
    Decimal::from_str(&normalized).map_err(|_| AmountError::InvalidAmount {
        value: s.to_string(),
        reason: "amount out of range",
    })
}

/// Format a date as a 6-digit `YYMMDD` value date.
pub fn format_value_date(date: &NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// Parse a 6-digit `YYMMDD` value date.
///
/// Two-digit years map into the 2000s per the usual `%y` pivot, which is
/// what current-traffic value dates need.
pub fn parse_value_date(s: &str) -> Result<NaiveDate, AmountError> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidDate {
            value: s.to_string(),
        });
    }
    NaiveDate::parse_from_str(s, "%y%m%d").map_err(|_| AmountError::InvalidDate {
        value: s.to_string(),
    })
}

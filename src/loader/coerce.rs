//! Text-to-typed coercion for CSV fields.
//!
//! The feed is untyped text; every coercion here is lossy in exactly one
//! direction: a value that does not parse becomes `None`, never an error and
//! never a truncated approximation. Which coercion applies is decided by the
//! column's declared kind in the catalog, not by sniffing values.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Scale for money columns (millions with cent precision).
const MONEY_SCALE: u32 = 2;

/// Date formats the feed has been observed to use.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%Y"];

/// Trim whitespace; an empty cell is an absent value.
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse a whole number. Accepts a plain integer or an integral decimal
/// rendering ("50.0"); anything else ("N/A", free text) is null.
pub fn parse_integer(raw: &str) -> Option<i32> {
    let value = non_empty(raw)?;
    if let Ok(n) = value.parse::<i32>() {
        return Some(n);
    }
    let d = value.parse::<Decimal>().ok()?;
    if d.fract().is_zero() {
        d.to_i32()
    } else {
        None
    }
}

/// Parse a money value to 2-place precision, returned in the store's
/// floating representation.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let value = non_empty(raw)?;
    let d = value.parse::<Decimal>().ok()?;
    d.round_dp(MONEY_SCALE).to_f64()
}

/// Parse a calendar date. Timestamps collapse to their date part; quarter
/// labels and other free text are null.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = non_empty(raw)?;
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_absent() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty(" x "), Some("x"));
    }

    #[test]
    fn integers_parse_or_null() {
        assert_eq!(parse_integer("50"), Some(50));
        assert_eq!(parse_integer("50.0"), Some(50));
        assert_eq!(parse_integer("3000"), Some(3000));
        assert_eq!(parse_integer("N/A"), None);
        assert_eq!(parse_integer("50.5"), None);
        assert_eq!(parse_integer(""), None);
    }

    #[test]
    fn decimals_round_to_cents() {
        assert_eq!(parse_decimal("713"), Some(713.00));
        assert_eq!(parse_decimal("250.459"), Some(250.46));
        assert_eq!(parse_decimal("N/A"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn dates_parse_known_formats_only() {
        let expected = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert_eq!(parse_date("2019-01-01"), Some(expected));
        assert_eq!(parse_date("01/01/2019"), Some(expected));
        assert_eq!(parse_date("2019-01-01 00:00:00"), Some(expected));
        // Quarter labels stay text in the columns that carry them.
        assert_eq!(parse_date("Q2 2023"), None);
        assert_eq!(parse_date("soon"), None);
    }
}

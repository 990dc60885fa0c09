//! Implementation of FromStr
//!

use crate::error::ParseDecimalError;
use crate::parsing;
use crate::Decimal;

use std::str::FromStr;

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parse a decimal from text
    ///
    /// Accepts the canonical form an earlier `to_string` produced,
    /// including the special spellings `NaN`, `Inf` and `Infinity`
    /// (case-insensitive, optionally signed), so every value round
    /// trips through its string form.
    fn from_str(s: &str) -> Result<Decimal, ParseDecimalError> {
        let trimmed = s.trim();

        let (sign_negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if unsigned.eq_ignore_ascii_case("nan") {
            return Ok(Decimal::nan());
        }
        if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
            return Ok(if sign_negative {
                Decimal::neg_infinity()
            } else {
                Decimal::infinity()
            });
        }

        parsing::parse_decimal(trimmed)
    }
}

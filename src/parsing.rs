//! Routines for parsing values into Decimals

use crate::digitbuf::DigitBuf;
use crate::error::ParseDecimalError;
use crate::{Context, Decimal, Kind, Sign};

use num_bigint::BigUint;
use std::collections::VecDeque;

/// Parse a plain decimal string: optional sign, digits, optional
/// point, digits, optional exponent suffix.
///
/// Leading integer zeros are stripped; trailing fractional zeros are
/// kept, so a parsed value renders back exactly as written.
pub(crate) fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseDecimalError::empty());
    }

    let (sign, rest) = match bytes[0] {
        b'+' => (Sign::Plus, &bytes[1..]),
        b'-' => (Sign::Minus, &bytes[1..]),
        _ => (Sign::Plus, bytes),
    };

    // split off an exponent suffix
    let (mantissa, exponent) = match rest.iter().position(|&b| b == b'e' || b == b'E') {
        Some(idx) => {
            let exp_str = std::str::from_utf8(&rest[idx + 1..]).map_err(|_| ParseDecimalError::invalid())?;
            let exp = exp_str.parse::<i64>().map_err(|_| ParseDecimalError::invalid())?;
            (&rest[..idx], exp)
        }
        None => (rest, 0),
    };

    let mut digits: VecDeque<u8> = VecDeque::with_capacity(mantissa.len());
    let mut decimals = 0usize;
    let mut seen_point = false;
    let mut seen_digit = false;

    for &byte in mantissa {
        match byte {
            b'0'..=b'9' => {
                digits.push_back(byte - b'0');
                seen_digit = true;
                if seen_point {
                    decimals += 1;
                }
            }
            b'.' if !seen_point => {
                seen_point = true;
            }
            _ => return Err(ParseDecimalError::invalid()),
        }
    }
    if !seen_digit {
        return Err(ParseDecimalError::invalid());
    }

    let mut buf = DigitBuf::from_parts(digits, decimals);
    buf.lead_trim();
    if exponent > 0 {
        buf.upscale(exponent as usize);
    } else if exponent < 0 {
        buf.downscale(exponent.unsigned_abs() as usize);
    }

    let sign = if buf.is_zero() { Sign::Plus } else { sign };
    Ok(Decimal {
        sign: sign,
        digits: buf,
        kind: Kind::Normal,
        ctx: Context::default(),
    })
}

/// Parse a hex digit string (no `0x` prefix) into an integer value.
///
/// The radix conversion accumulates through the bigint backend, which
/// performs the repeated multiply-by-sixteen exactly.
pub(crate) fn parse_from_hex(s: &str) -> Result<Decimal, ParseDecimalError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseDecimalError::empty());
    }

    let (sign, rest) = match bytes[0] {
        b'+' => (Sign::Plus, &bytes[1..]),
        b'-' => (Sign::Minus, &bytes[1..]),
        _ => (Sign::Plus, bytes),
    };
    if rest.is_empty() {
        return Err(ParseDecimalError::invalid());
    }

    let magnitude = BigUint::parse_bytes(rest, 16).ok_or_else(ParseDecimalError::invalid)?;

    let digits: VecDeque<u8> = magnitude
        .to_str_radix(10)
        .bytes()
        .map(|b| b - b'0')
        .collect();

    let buf = DigitBuf::from_parts(digits, 0);
    let sign = if buf.is_zero() { Sign::Plus } else { sign };
    Ok(Decimal {
        sign: sign,
        digits: buf,
        kind: Kind::Normal,
        ctx: Context::default(),
    })
}

/// Create a decimal from an f64
///
/// The value is textualized with the shortest round-trip format and
/// re-parsed, so `0.1f64` becomes the decimal `0.1` rather than the
/// binary fraction behind it. Non-finite inputs map onto the matching
/// special values.
pub(crate) fn parse_from_f64(n: f64) -> Decimal {
    if n.is_nan() {
        return Decimal::nan();
    }
    if n.is_infinite() {
        return if n.is_sign_negative() {
            Decimal::neg_infinity()
        } else {
            Decimal::infinity()
        };
    }

    let repr = format!("{}", n);
    parse_decimal(&repr).expect("float display is always a valid decimal")
}

/// Create a decimal from an f32 via the same round-trip format
pub(crate) fn parse_from_f32(n: f32) -> Decimal {
    if n.is_nan() {
        return Decimal::nan();
    }
    if n.is_infinite() {
        return if n.is_sign_negative() {
            Decimal::neg_infinity()
        } else {
            Decimal::infinity()
        };
    }

    let repr = format!("{}", n);
    parse_decimal(&repr).expect("float display is always a valid decimal")
}

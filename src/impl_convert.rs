//! From<T>, narrowing checks, and To-primitive conversions
//!
//! Conversion from a primitive happens once, at the call boundary;
//! everything downstream operates on decimal pairs.

use crate::error::{DecimalError, ParseDecimalError};
use crate::parsing;
use crate::{Decimal, Kind, Sign};

use std::convert::TryFrom;

macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for Decimal {
            fn from(n: $t) -> Decimal {
                parsing::parse_decimal(&n.to_string())
                    .expect("integer display is always a valid decimal")
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(usize);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);
impl_from_int_primitive!(isize);

impl From<f32> for Decimal {
    fn from(n: f32) -> Decimal {
        parsing::parse_from_f32(n)
    }
}

impl From<f64> for Decimal {
    fn from(n: f64) -> Decimal {
        parsing::parse_from_f64(n)
    }
}

impl Decimal {
    /// Parse a hex digit string, without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Decimal, ParseDecimalError> {
        parsing::parse_from_hex(s)
    }

    /// Build a decimal from a stringified literal token
    ///
    /// This is the engine behind the [`dec!`](crate::dec) macro; quote
    /// characters and `_` digit separators are stripped before parsing.
    ///
    /// # Panics
    ///
    /// Panics if the token does not parse as a decimal number.
    pub fn from_literal(token: &str) -> Decimal {
        let cleaned: String = token
            .chars()
            .filter(|&c| c != '"' && c != '_')
            .collect();
        match parsing::parse_decimal(&cleaned) {
            Ok(value) => value,
            Err(error) => panic!("invalid decimal literal {:?}: {}", token, error),
        }
    }

    /// Integer value of a finite integral decimal, if it fits in i128
    pub(crate) fn integral_i128(&self) -> Option<i128> {
        if self.kind != Kind::Normal || !self.is_int() {
            return None;
        }
        let mut repr = String::with_capacity(self.digits.int_len() + 1);
        if self.sign == Sign::Minus {
            repr.push('-');
        }
        for &d in self.digits.iter().take(self.digits.int_len()) {
            repr.push((b'0' + d) as char);
        }
        repr.parse::<i128>().ok()
    }

    /// Closest f64, losing digits past its precision
    pub(crate) fn approx_f64(&self) -> f64 {
        match self.kind {
            Kind::Nan => f64::NAN,
            Kind::Infinity => {
                if self.sign == Sign::Minus {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            Kind::Normal => self
                .to_string()
                .parse::<f64>()
                .unwrap_or(f64::NAN),
        }
    }
}

macro_rules! impl_fits_to_int {
    ($t:ty, $fits:ident, $to:ident) => {
        impl Decimal {
            /// True iff the value is finite, integral, and in range of
            /// the target type
            pub fn $fits(&self) -> bool {
                self.integral_i128()
                    .map(|n| <$t>::try_from(n).is_ok())
                    .unwrap_or(false)
            }

            /// Narrow to the target type
            ///
            /// A value that does not fit is an error when the context
            /// has `throw_on_error` set; otherwise the fraction is
            /// truncated and the result clamped to the target range
            /// (NaN becomes zero).
            pub fn $to(&self) -> Result<$t, DecimalError> {
                if let Some(n) = self.integral_i128() {
                    if let Ok(out) = <$t>::try_from(n) {
                        return Ok(out);
                    }
                }
                if self.ctx.throw_on_error() {
                    return Err(DecimalError::narrowing_overflow());
                }

                // lenient path: truncate, then clamp
                if self.kind == Kind::Nan {
                    return Ok(0);
                }
                if self.kind == Kind::Infinity {
                    return Ok(if self.sign == Sign::Minus { <$t>::MIN } else { <$t>::MAX });
                }
                match self.trunc().integral_i128() {
                    Some(n) if n < <$t>::MIN as i128 => Ok(<$t>::MIN),
                    Some(n) if n > <$t>::MAX as i128 => Ok(<$t>::MAX),
                    Some(n) => Ok(n as $t),
                    None => Ok(if self.sign == Sign::Minus { <$t>::MIN } else { <$t>::MAX }),
                }
            }
        }
    };
}

impl_fits_to_int!(i8, fits_i8, to_i8);
impl_fits_to_int!(u8, fits_u8, to_u8);
impl_fits_to_int!(i16, fits_i16, to_i16);
impl_fits_to_int!(u16, fits_u16, to_u16);
impl_fits_to_int!(i32, fits_i32, to_i32);
impl_fits_to_int!(u32, fits_u32, to_u32);
impl_fits_to_int!(i64, fits_i64, to_i64);
impl_fits_to_int!(u64, fits_u64, to_u64);

impl Decimal {
    /// True iff the value is finite and within f32 range
    pub fn fits_f32(&self) -> bool {
        self.kind == Kind::Normal && (self.approx_f64() as f32).is_finite()
    }

    /// True iff the value is finite and within f64 range
    pub fn fits_f64(&self) -> bool {
        self.kind == Kind::Normal && self.approx_f64().is_finite()
    }

    /// Narrow to f32, losing digits past its precision
    pub fn to_f32(&self) -> Result<f32, DecimalError> {
        if self.fits_f32() {
            return Ok(self.approx_f64() as f32);
        }
        if self.ctx.throw_on_error() {
            return Err(DecimalError::narrowing_overflow());
        }
        Ok(self.approx_f64() as f32)
    }

    /// Narrow to f64, losing digits past its precision
    pub fn to_f64(&self) -> Result<f64, DecimalError> {
        if self.fits_f64() {
            return Ok(self.approx_f64());
        }
        if self.ctx.throw_on_error() {
            return Err(DecimalError::narrowing_overflow());
        }
        Ok(self.approx_f64())
    }
}

#[cfg(test)]
mod test_convert {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    #[test]
    fn from_integers() {
        assert_eq!(Decimal::from(0u8).to_string(), "0");
        assert_eq!(Decimal::from(-123i32).to_string(), "-123");
        assert_eq!(Decimal::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Decimal::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(
            Decimal::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455",
        );
    }

    #[test]
    fn from_floats() {
        assert_eq!(Decimal::from(0.1f64).to_string(), "0.1");
        assert_eq!(Decimal::from(-0.5f32).to_string(), "-0.5");
        assert!(Decimal::from(f64::NAN).is_nan());
    }

    #[test]
    fn fits_checks() {
        let small = Decimal::from_str("100").unwrap();
        assert!(small.fits_i8() == false);
        assert!(small.fits_u8());
        assert!(small.fits_i32());
        assert!(small.fits_f64());

        let fraction = Decimal::from_str("1.5").unwrap();
        assert!(!fraction.fits_i32());
        assert!(fraction.fits_f32());

        let negative = Decimal::from_str("-1").unwrap();
        assert!(!negative.fits_u64());
        assert!(negative.fits_i64());

        assert!(!Decimal::nan().fits_i32());
        assert!(!Decimal::infinity().fits_f64());
    }

    #[test]
    fn narrowing_errors_by_default() {
        let big = Decimal::from_str("300").unwrap();
        assert!(big.to_i8().is_err());
        assert_eq!(big.to_i16().unwrap(), 300);

        let fraction = Decimal::from_str("2.5").unwrap();
        assert!(fraction.to_i32().is_err());
    }

    mod narrowing_saturates_when_not_throwing {
        use super::*;
        use paste::paste;

        macro_rules! impl_case {
            ($t:ident: $input:literal => $expected:expr) => {
                paste! {
                    #[test]
                    fn [< case_ $t >]() {
                        let lenient = Context::default().with_throw_on_error(false);
                        let value = Decimal::from_str($input).unwrap().with_context(lenient);
                        assert_eq!(value.[< to_ $t >]().unwrap(), $expected);
                    }
                }
            };
        }

        impl_case!(i8: "300" => i8::MAX);
        impl_case!(u8: "-5" => u8::MIN);
        impl_case!(i16: "-40000" => i16::MIN);
        impl_case!(i32: "2.5" => 2);
        impl_case!(u32: "4294967296" => u32::MAX);
        impl_case!(i64: "NaN" => 0);
        impl_case!(u64: "Inf" => u64::MAX);
    }

    #[test]
    fn float_narrowing() {
        let x = Decimal::from_str("2.5").unwrap();
        assert_eq!(x.to_f64().unwrap(), 2.5);
        assert_eq!(x.to_f32().unwrap(), 2.5f32);

        let too_big_for_f32 = Decimal::from_str("1e40").unwrap();
        assert!(!too_big_for_f32.fits_f32());
        assert!(too_big_for_f32.fits_f64());
        assert!(too_big_for_f32.to_f32().is_err());
    }
}

//! Implementations of num_traits
//!

use crate::error::ParseDecimalError;
use crate::{Decimal, Kind, Sign};

use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};
use std::convert::TryFrom;

impl Zero for Decimal {
    #[inline]
    fn zero() -> Decimal {
        Decimal::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl One for Decimal {
    #[inline]
    fn one() -> Decimal {
        Decimal::one()
    }
}

impl Num for Decimal {
    type FromStrRadixErr = ParseDecimalError;

    /// Only radix 10 and the hex surface (radix 16) are supported
    fn from_str_radix(s: &str, radix: u32) -> Result<Decimal, ParseDecimalError> {
        match radix {
            10 => s.parse(),
            16 => Decimal::from_hex(s),
            _ => Err(ParseDecimalError::invalid_radix()),
        }
    }
}

impl Signed for Decimal {
    #[inline]
    fn abs(&self) -> Decimal {
        Decimal::abs(self)
    }

    fn abs_sub(&self, other: &Decimal) -> Decimal {
        if self <= other {
            Decimal::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> Decimal {
        Decimal::signum(self)
    }

    fn is_positive(&self) -> bool {
        self.kind != Kind::Nan && self.sign == Sign::Plus && !self.is_zero()
    }

    fn is_negative(&self) -> bool {
        self.kind != Kind::Nan && self.sign == Sign::Minus
    }
}

impl ToPrimitive for Decimal {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        if self.kind != Kind::Normal {
            return None;
        }
        self.trunc().integral_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_i128().and_then(|n| u128::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.approx_f64())
    }

    fn to_f32(&self) -> Option<f32> {
        Some(self.approx_f64() as f32)
    }
}

impl FromPrimitive for Decimal {
    fn from_i64(n: i64) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_u64(n: u64) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_i128(n: i128) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_u128(n: u128) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_f64(n: f64) -> Option<Decimal> {
        Some(Decimal::from(n))
    }

    fn from_f32(n: f32) -> Option<Decimal> {
        Some(Decimal::from(n))
    }
}

/// The exponentiation operator surface
///
/// Follows the context's error boundary the way `/` does: an illegal
/// combination (`0^0`, negative base with fractional exponent) panics
/// when `throw_on_error` is set and collapses to NaN otherwise. The
/// fallible form is [`Decimal::pow`].
impl<'a, 'b> Pow<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn pow(self, rhs: &Decimal) -> Decimal {
        match Decimal::pow(self, rhs) {
            Ok(value) => value,
            Err(error) => {
                if self.context().throw_on_error() {
                    panic!("{}", error);
                }
                Decimal::nan_with_context(self.context())
            }
        }
    }
}

impl Pow<Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn pow(self, rhs: Decimal) -> Decimal {
        Pow::pow(&self, &rhs)
    }
}

impl<'a> Pow<&'a Decimal> for Decimal {
    type Output = Decimal;

    #[inline]
    fn pow(self, rhs: &Decimal) -> Decimal {
        Pow::pow(&self, rhs)
    }
}

impl<'a> Pow<Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn pow(self, rhs: Decimal) -> Decimal {
        Pow::pow(self, &rhs)
    }
}

impl std::iter::Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

impl<'a> std::iter::Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod test_num_traits {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn zero_and_one() {
        assert!(Decimal::zero().is_zero());
        assert_eq!(Decimal::one().to_string(), "1");
        assert!(!Decimal::nan().is_zero());
    }

    #[test]
    fn from_str_radix_dispatch() {
        assert_eq!(Decimal::from_str_radix("25", 10).unwrap().to_string(), "25");
        assert_eq!(Decimal::from_str_radix("ff", 16).unwrap().to_string(), "255");
        assert!(Decimal::from_str_radix("101", 2).is_err());
    }

    #[test]
    fn signed_predicates() {
        let pos = Decimal::from_str("2.5").unwrap();
        let neg = Decimal::from_str("-2.5").unwrap();

        assert!(Signed::is_positive(&pos));
        assert!(Signed::is_negative(&neg));
        assert!(!Signed::is_positive(&Decimal::zero()));
        assert!(!Signed::is_negative(&Decimal::nan()));
        assert_eq!(Signed::signum(&neg).to_string(), "-1");
        assert_eq!(neg.abs().to_string(), "2.5");
        assert_eq!(pos.abs_sub(&neg).to_string(), "5");
    }

    #[test]
    fn primitive_round_trips() {
        // the inherent to_* methods return Result, so qualify the
        // trait's Option-returning forms
        let x = Decimal::from_str("123.9").unwrap();
        assert_eq!(ToPrimitive::to_i64(&x), Some(123));
        assert_eq!(ToPrimitive::to_u64(&x), Some(123));
        assert_eq!(ToPrimitive::to_f64(&x), Some(123.9));

        let neg = Decimal::from_str("-7").unwrap();
        assert_eq!(ToPrimitive::to_i64(&neg), Some(-7));
        assert_eq!(ToPrimitive::to_u64(&neg), None);
        assert_eq!(ToPrimitive::to_i64(&Decimal::nan()), None);
        assert_eq!(ToPrimitive::to_i64(&Decimal::infinity()), None);

        assert_eq!(Decimal::from_f64(1.25).unwrap().to_string(), "1.25");
        assert_eq!(Decimal::from_i64(-3).unwrap().to_string(), "-3");
    }

    #[test]
    fn sum_iterator() {
        let values = vec![
            Decimal::from(1),
            Decimal::from_str("2.5").unwrap(),
            Decimal::from_str("-0.5").unwrap(),
        ];
        let total: Decimal = values.iter().sum();
        assert_eq!(total.to_string(), "3");
    }

    #[test]
    fn pow_operator_surface() {
        let two = Decimal::from(2);
        let ten = Decimal::from(10);
        assert_eq!(Pow::pow(&two, &ten).to_string(), "1024");
    }
}

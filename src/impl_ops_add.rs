//! Addition operator trait implementation
//!

use crate::arithmetic::addition::add_magnitudes;
use crate::arithmetic::subtraction::sub_magnitudes;
use crate::digitbuf::DigitBuf;
use crate::Decimal;

use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

/// Signed addition; magnitudes only meet in the digit routines.
///
/// Equal signs sum the magnitudes; opposite signs subtract the smaller
/// magnitude from the larger, keeping the larger operand's sign.
pub(crate) fn add_decimals(lhs: &Decimal, rhs: &Decimal) -> Decimal {
    let ctx = Decimal::result_context(lhs, rhs);

    if lhs.is_nan() || rhs.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    match (lhs.is_inf(), rhs.is_inf()) {
        (true, true) => {
            return if lhs.sign() == rhs.sign() {
                Decimal::infinity_with_sign(lhs.sign()).with_context(ctx)
            } else {
                Decimal::nan_with_context(&ctx)
            };
        }
        (true, false) => return Decimal::infinity_with_sign(lhs.sign()).with_context(ctx),
        (false, true) => return Decimal::infinity_with_sign(rhs.sign()).with_context(ctx),
        (false, false) => {}
    }

    if lhs.sign() == rhs.sign() {
        let sum = add_magnitudes(lhs.magnitude(), rhs.magnitude());
        return Decimal::from_magnitude(lhs.sign(), sum, &ctx);
    }

    match DigitBuf::cmp_magnitude(lhs.magnitude(), rhs.magnitude()) {
        Ordering::Equal => Decimal::zero().with_context(ctx),
        Ordering::Greater => {
            let diff = sub_magnitudes(lhs.magnitude(), rhs.magnitude());
            Decimal::from_magnitude(lhs.sign(), diff, &ctx)
        }
        Ordering::Less => {
            let diff = sub_magnitudes(rhs.magnitude(), lhs.magnitude());
            Decimal::from_magnitude(rhs.sign(), diff, &ctx)
        }
    }
}

impl<'a, 'b> Add<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: &Decimal) -> Decimal {
        add_decimals(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Add for Decimal, add);

forward_val_assignop!(impl AddAssign for Decimal, add_assign);

impl<'a> AddAssign<&'a Decimal> for Decimal {
    #[inline]
    fn add_assign(&mut self, rhs: &Decimal) {
        let sum = add_decimals(self, rhs);
        *self = sum;
    }
}

#[cfg(test)]
mod test_add {
    use crate::Decimal;
    use std::str::FromStr;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let a = Decimal::from_str($a).unwrap();
                let b = Decimal::from_str($b).unwrap();
                let expected = $expected;

                assert_eq!((&a + &b).to_string(), expected);
                assert_eq!((&b + &a).to_string(), expected);

                let mut assigned = a.clone();
                assigned += b;
                assert_eq!(assigned.to_string(), expected);
            }
        };
    }

    impl_case!(case_1_2: "1" + "2" => "3");
    impl_case!(case_carry: "999.99" + "0.01" => "1000");
    impl_case!(case_signs: "5" + "-8" => "-3");
    impl_case!(case_cancel: "12.34" + "-12.34" => "0");
    impl_case!(case_frac: "0.1" + "0.2" => "0.3");
    impl_case!(case_uneven: "1.005" + "2.99" => "3.995");
    impl_case!(case_neg_neg: "-1.5" + "-2.25" => "-3.75");

    #[test]
    fn nan_is_absorbing() {
        let x = Decimal::from_str("42").unwrap();
        assert!((&x + &Decimal::nan()).is_nan());
        assert!((&Decimal::nan() + &x).is_nan());
    }

    #[test]
    fn infinities() {
        let x = Decimal::from_str("1").unwrap();
        let inf = Decimal::infinity();

        assert!((&x + &inf).is_inf());
        assert!((&inf + &inf).is_inf());
        assert!((&inf + &-&inf).is_nan());
    }
}

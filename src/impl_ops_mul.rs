//! Multiplication operator trait implementation
//!

use crate::arithmetic::division::mul_sign;
use crate::arithmetic::multiplication::mul_magnitudes;
use crate::Decimal;

use std::ops::{Mul, MulAssign};

pub(crate) fn mul_decimals(lhs: &Decimal, rhs: &Decimal) -> Decimal {
    let ctx = Decimal::result_context(lhs, rhs);

    if lhs.is_nan() || rhs.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }

    let sign = mul_sign(lhs.sign(), rhs.sign());
    if lhs.is_inf() || rhs.is_inf() {
        // infinity times zero has no meaningful magnitude
        if lhs.is_zero() || rhs.is_zero() {
            return Decimal::nan_with_context(&ctx);
        }
        return Decimal::infinity_with_sign(sign).with_context(ctx);
    }

    let mut product = mul_magnitudes(lhs.magnitude(), rhs.magnitude());
    product.narrow_to(ctx.decimals(), ctx.rounding_mode());
    Decimal::from_magnitude(sign, product, &ctx)
}

impl<'a, 'b> Mul<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: &Decimal) -> Decimal {
        mul_decimals(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for Decimal, mul);

forward_val_assignop!(impl MulAssign for Decimal, mul_assign);

impl<'a> MulAssign<&'a Decimal> for Decimal {
    #[inline]
    fn mul_assign(&mut self, rhs: &Decimal) {
        let product = mul_decimals(self, rhs);
        *self = product;
    }
}

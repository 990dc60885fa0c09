//!
//! Modulus of decimal values
//!

use crate::arithmetic::division::long_divide_magnitudes;
use crate::arithmetic::{multiplication::mul_magnitudes, subtraction::sub_magnitudes};
use crate::{Context, Decimal, DecimalError};

/// Remainder of `lhs / rhs`
///
/// Computed as `a - q * b` with `q` the integer quotient truncated
/// toward zero, so the sign of a non-zero result always follows the
/// dividend. A finite value modulo infinity is the value itself;
/// infinity modulo anything is NaN.
pub(crate) fn impl_rem(lhs: &Decimal, rhs: &Decimal, ctx: &Context) -> Result<Decimal, DecimalError> {
    if lhs.is_nan() || rhs.is_nan() || lhs.is_inf() {
        return Ok(Decimal::nan_with_context(ctx));
    }
    if rhs.is_inf() {
        return Ok(lhs.clone().with_context(ctx.clone()));
    }
    if rhs.is_zero() {
        return Err(DecimalError::modulo_by_zero());
    }
    if lhs.is_zero() {
        return Ok(Decimal::zero().with_context(ctx.clone()));
    }

    let int_quotient = long_divide_magnitudes(lhs.magnitude(), rhs.magnitude(), 0);
    let product = mul_magnitudes(&int_quotient, rhs.magnitude());
    let remainder = sub_magnitudes(lhs.magnitude(), &product);

    Ok(Decimal::from_magnitude(lhs.sign(), remainder, ctx))
}

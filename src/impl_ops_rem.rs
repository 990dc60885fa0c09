//! Remainder operator trait implementation
//!
//! Like `/`, the `%` operator panics on a zero divisor when the left
//! operand's context has `throw_on_error` set, and collapses to NaN
//! otherwise. [`Decimal::checked_rem`] exposes the fallible form.

use crate::arithmetic::modulo::impl_rem;
use crate::Decimal;

use std::ops::{Rem, RemAssign};

pub(crate) fn rem_decimals(lhs: &Decimal, rhs: &Decimal) -> Decimal {
    let ctx = Decimal::result_context(lhs, rhs);
    match impl_rem(lhs, rhs, &ctx) {
        Ok(remainder) => remainder,
        Err(error) => {
            if ctx.throw_on_error() {
                panic!("{}", error);
            }
            Decimal::nan_with_context(&ctx)
        }
    }
}

impl<'a, 'b> Rem<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn rem(self, rhs: &Decimal) -> Decimal {
        rem_decimals(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Rem for Decimal, rem);

forward_val_assignop!(impl RemAssign for Decimal, rem_assign);

impl<'a> RemAssign<&'a Decimal> for Decimal {
    #[inline]
    fn rem_assign(&mut self, rhs: &Decimal) {
        let remainder = rem_decimals(self, rhs);
        *self = remainder;
    }
}

//! Division operator trait implementation
//!
//! The `/` operator mirrors primitive integer division at the error
//! boundary: dividing a finite value by exact zero panics when the
//! left operand's context has `throw_on_error` set, and otherwise
//! collapses to the matching special value. [`Decimal::checked_div`]
//! exposes the fallible form.

use crate::arithmetic::division::{division_special, impl_div};
use crate::Decimal;

use std::ops::{Div, DivAssign};

pub(crate) fn div_decimals(lhs: &Decimal, rhs: &Decimal) -> Decimal {
    let ctx = Decimal::result_context(lhs, rhs);
    match impl_div(lhs, rhs, &ctx) {
        Ok(quotient) => quotient,
        Err(error) => {
            if ctx.throw_on_error() {
                panic!("{}", error);
            }
            division_special(lhs, &ctx)
        }
    }
}

impl<'a, 'b> Div<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn div(self, rhs: &Decimal) -> Decimal {
        div_decimals(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Div for Decimal, div);

forward_val_assignop!(impl DivAssign for Decimal, div_assign);

impl<'a> DivAssign<&'a Decimal> for Decimal {
    #[inline]
    fn div_assign(&mut self, rhs: &Decimal) {
        let quotient = div_decimals(self, rhs);
        *self = quotient;
    }
}

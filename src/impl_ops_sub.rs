//! Subtraction and negation operator trait implementations
//!

use crate::impl_ops_add::add_decimals;
use crate::{Decimal, Kind, Sign};

use std::ops::{Neg, Sub, SubAssign};

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(mut self) -> Decimal {
        match self.kind {
            Kind::Nan => self,
            _ if self.is_zero() => self,
            _ => {
                self.sign = match self.sign {
                    Sign::Minus => Sign::Plus,
                    _ => Sign::Minus,
                };
                self
            }
        }
    }
}

impl<'a> Neg for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        self.clone().neg()
    }
}

impl<'a, 'b> Sub<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: &Decimal) -> Decimal {
        add_decimals(self, &rhs.neg())
    }
}

forward_all_binop_to_ref_ref!(impl Sub for Decimal, sub);

forward_val_assignop!(impl SubAssign for Decimal, sub_assign);

impl<'a> SubAssign<&'a Decimal> for Decimal {
    #[inline]
    fn sub_assign(&mut self, rhs: &Decimal) {
        let diff = add_decimals(self, &rhs.neg());
        *self = diff;
    }
}

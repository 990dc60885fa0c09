//! Implement math operations with primitive operands: Add, Sub, etc
//!
//! One conversion happens at the call boundary; the decimal-pair
//! operators do the rest.

use crate::Decimal;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign,
};

macro_rules! impl_binop_for_primitive {
    ($t:ty) => {
        impl_binop_for_primitive!(IMPL $t => Add:add:AddAssign:add_assign);
        impl_binop_for_primitive!(IMPL $t => Sub:sub:SubAssign:sub_assign);
        impl_binop_for_primitive!(IMPL $t => Mul:mul:MulAssign:mul_assign);
        impl_binop_for_primitive!(IMPL $t => Div:div:DivAssign:div_assign);
        impl_binop_for_primitive!(IMPL $t => Rem:rem:RemAssign:rem_assign);
    };
    (IMPL $t:ty => $imp:ident:$method:ident:$assign_imp:ident:$assign_method:ident) => {
        impl $imp<$t> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: $t) -> Decimal {
                $imp::$method(self, Decimal::from(rhs))
            }
        }

        impl $imp<$t> for &Decimal {
            type Output = Decimal;

            fn $method(self, rhs: $t) -> Decimal {
                $imp::$method(self, &Decimal::from(rhs))
            }
        }

        impl $imp<Decimal> for $t {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                $imp::$method(Decimal::from(self), rhs)
            }
        }

        impl $imp<&Decimal> for $t {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Decimal {
                $imp::$method(&Decimal::from(self), rhs)
            }
        }

        impl $assign_imp<$t> for Decimal {
            fn $assign_method(&mut self, rhs: $t) {
                $assign_imp::$assign_method(self, Decimal::from(rhs));
            }
        }
    };
}

impl_binop_for_primitive!(u8);
impl_binop_for_primitive!(u16);
impl_binop_for_primitive!(u32);
impl_binop_for_primitive!(u64);
impl_binop_for_primitive!(u128);
impl_binop_for_primitive!(i8);
impl_binop_for_primitive!(i16);
impl_binop_for_primitive!(i32);
impl_binop_for_primitive!(i64);
impl_binop_for_primitive!(i128);
impl_binop_for_primitive!(f32);
impl_binop_for_primitive!(f64);

#[cfg(test)]
mod test_primitive_ops {
    use crate::Decimal;
    use std::str::FromStr;

    #[test]
    fn mixed_operand_arithmetic() {
        let x = Decimal::from_str("1.5").unwrap();

        assert_eq!((&x + 1i32).to_string(), "2.5");
        assert_eq!((1i32 + &x).to_string(), "2.5");
        assert_eq!((&x * 4u8).to_string(), "6");
        assert_eq!((10i32 - &x).to_string(), "8.5");
        assert_eq!((&x / 2i32).to_string(), "0.75");
        assert_eq!((7i32 % &x).to_string(), "1");
    }

    #[test]
    fn assigning_forms() {
        let mut x = Decimal::from_str("10").unwrap();
        x += 5;
        x -= 1u8;
        x *= 2;
        x /= 4;
        assert_eq!(x.to_string(), "7");
    }

    #[test]
    fn float_operands() {
        let x = Decimal::from_str("1").unwrap();
        assert_eq!((&x + 0.25f64).to_string(), "1.25");
        assert_eq!((0.25f64 + &x).to_string(), "1.25");
    }
}

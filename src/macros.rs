// \file src/macros.rs
//! forwarding and literal macros

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &other)
            }
        }
    };
}

// Forward everything to ref-ref, where the arithmetic lives
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

macro_rules! forward_val_assignop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                // forward to mutref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

/// Build a [`Decimal`](crate::Decimal) from a numeric or string literal.
///
/// ```
/// use fixdecimal::dec;
///
/// let pi_ish = dec!(3.14);
/// let third = dec!("0.333");
/// let big = dec!("123456789123456789123456789123456789");
/// assert_eq!(pi_ish.to_string(), "3.14");
/// # let _ = (third, big);
/// ```
///
/// The literal routes through the string parser, so values beyond any
/// primitive integer range are accepted.
///
/// # Panics
///
/// Panics if the literal does not parse as a decimal number.
#[macro_export]
macro_rules! dec {
    ($value:literal) => {
        $crate::Decimal::from_literal(stringify!($value))
    };
}

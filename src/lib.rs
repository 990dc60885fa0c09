// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary-precision fixed-point decimals
//!
//! A [`Decimal`] stores a signed sequence of base-10 digits together
//! with the position of the decimal point, so values like `0.1` are
//! represented exactly rather than through binary approximation. Each
//! value also carries one of the three IEEE-754-style special states
//! (`NaN`, `+Inf`, `-Inf`) and an embedded [`Context`] holding the
//! iteration counts and flags that drive every variable-precision
//! operation, from division refinement to the transcendental series.
//!
//! The default context keeps 40 error-corrected fractional digits; the
//! compile-time default can be changed with the
//! `RUST_FIXDECIMAL_DEFAULT_DECIMALS` environment variable.
//!
//! # Example
//!
//! ```
//! use fixdecimal::Decimal;
//! use std::str::FromStr;
//!
//! let third = Decimal::from(1) / Decimal::from(3);
//! assert!(third.to_string().starts_with("0.3333333333"));
//!
//! let two = Decimal::from_str("2").unwrap();
//! let root = two.sqrt().unwrap();
//! assert!(root.to_string().starts_with("1.41421356"));
//! ```

#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]

pub extern crate num_bigint;
pub extern crate num_traits;

#[cfg(test)]
extern crate paste;

#[cfg(feature = "serde")]
extern crate serde as serde_crate;

use std::cmp::Ordering;

pub use num_bigint::Sign;
pub use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};

#[macro_use]
mod macros;

// "low level" digit routines
mod digitbuf;
mod arithmetic;

// transcendental function suite
mod functions;

// From<T>, TryFrom<T>, Fits/To narrowing
mod impl_convert;
mod impl_trait_from_str;

// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialEq / PartialOrd
mod impl_cmp;

// Implementations of num_traits
mod impl_num;

// Implementations of std::fmt traits and stringification routines
mod impl_fmt;

// Implementations for deserializations and serializations
#[cfg(feature = "serde")]
pub mod impl_serde;

// construct Decimals from strings and floats
mod parsing;

// Routines for rounding
pub mod rounding;
pub use rounding::RoundingMode;

// Mathematical context
mod context;
pub use context::Context;

// Precomputed constant table
mod constants;
pub use constants::Constants;

// Bernoulli number generator
mod bernoulli;
pub use bernoulli::Bernoulli;

mod error;
pub use error::{DecimalError, ParseDecimalError};

use digitbuf::DigitBuf;

/// Fractional guard digits used by internal series evaluation before
/// the final narrowing to the requested precision.
pub(crate) const WORK_GUARD: usize = 10;


/// Discriminates finite values from the IEEE-754-style specials.
///
/// Negative zero and negative infinity are differentiated by the sign,
/// not the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Normal,
    Infinity,
    Nan,
}

/// An arbitrary-precision fixed-point decimal number.
///
/// Values are immutable: every operation builds a new `Decimal`. A
/// value owns its digit buffer and its [`Context`]; binary operations
/// adopt the left operand's context, widening its `decimals` to cover
/// both operands' stored fractions.
///
/// The default value is `NaN`, which mirrors the behavior of an
/// uninitialized number and is absorbing through all arithmetic.
#[derive(Clone)]
pub struct Decimal {
    sign: Sign,
    digits: DigitBuf,
    kind: Kind,
    ctx: Context,
}

impl Default for Decimal {
    fn default() -> Decimal {
        Decimal::nan()
    }
}

impl Decimal {
    /// The not-a-number value
    pub fn nan() -> Decimal {
        Decimal {
            sign: Sign::NoSign,
            digits: DigitBuf::zero(),
            kind: Kind::Nan,
            ctx: Context::default(),
        }
    }

    /// Positive infinity
    pub fn infinity() -> Decimal {
        Decimal::infinity_with_sign(Sign::Plus)
    }

    /// Negative infinity
    pub fn neg_infinity() -> Decimal {
        Decimal::infinity_with_sign(Sign::Minus)
    }

    pub(crate) fn infinity_with_sign(sign: Sign) -> Decimal {
        let sign = if sign == Sign::Minus { Sign::Minus } else { Sign::Plus };
        Decimal {
            sign: sign,
            digits: DigitBuf::zero(),
            kind: Kind::Infinity,
            ctx: Context::default(),
        }
    }

    pub(crate) fn nan_with_context(ctx: &Context) -> Decimal {
        let mut nan = Decimal::nan();
        nan.ctx = ctx.clone();
        nan
    }

    /// The value `0`
    pub fn zero() -> Decimal {
        Decimal {
            sign: Sign::Plus,
            digits: DigitBuf::zero(),
            kind: Kind::Normal,
            ctx: Context::default(),
        }
    }

    /// The value `1`
    pub fn one() -> Decimal {
        Decimal {
            sign: Sign::Plus,
            digits: DigitBuf::single(1),
            kind: Kind::Normal,
            ctx: Context::default(),
        }
    }

    /// Build a finite value from a sign and magnitude
    ///
    /// Trims to canonical form, normalizes the sign of zero, and
    /// saturates to infinity past the context's representable range.
    pub(crate) fn from_magnitude(sign: Sign, mut digits: DigitBuf, ctx: &Context) -> Decimal {
        digits.lead_trim();
        digits.trail_trim();

        if digits.is_zero() {
            let mut zero = Decimal::zero();
            zero.ctx = ctx.clone();
            return zero;
        }

        let sign = if sign == Sign::Minus { Sign::Minus } else { Sign::Plus };
        let value = Decimal {
            sign: sign,
            digits: digits,
            kind: Kind::Normal,
            ctx: ctx.clone(),
        };
        value.saturated()
    }

    /// Collapse to signed infinity if the magnitude exceeds 10^decimals
    pub(crate) fn saturated(self) -> Decimal {
        if self.kind != Kind::Normal {
            return self;
        }

        let limit_width = self.ctx.decimals() + 1;
        let int_width = {
            let lead = self.digits.iter()
                                  .take(self.digits.int_len())
                                  .take_while(|&&d| d == 0)
                                  .count();
            self.digits.int_len() - lead
        };

        if int_width < limit_width {
            return self;
        }
        if int_width == limit_width {
            let limit = arithmetic::ten_to_the(self.ctx.decimals());
            if DigitBuf::cmp_magnitude(&self.digits, &limit) != Ordering::Greater {
                return self;
            }
        }

        let mut inf = Decimal::infinity_with_sign(self.sign);
        inf.ctx = self.ctx;
        inf
    }

    /// Checks if the value is `NaN`
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.kind == Kind::Nan
    }

    /// Checks if the value is positive or negative infinity
    #[inline]
    pub fn is_inf(&self) -> bool {
        self.kind == Kind::Infinity
    }

    /// Checks if the value is exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.kind == Kind::Normal && self.digits.is_zero()
    }

    /// Checks if the value is finite with no fractional digits
    #[inline]
    pub fn is_int(&self) -> bool {
        self.kind == Kind::Normal && self.digits.is_integral()
    }

    /// Sign of the value; `NoSign` only for default-constructed NaN
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of stored fractional digits (zero for special values)
    #[inline]
    pub fn decimals(&self) -> usize {
        match self.kind {
            Kind::Normal => self.digits.decimals(),
            _ => 0,
        }
    }

    /// Number of stored integer digits (zero for special values)
    #[inline]
    pub fn ints(&self) -> usize {
        match self.kind {
            Kind::Normal => self.digits.int_len(),
            _ => 0,
        }
    }

    /// The context governing operations on this value
    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Return the value re-configured with a new context
    ///
    /// If the supplied `decimals` is lower than the value's stored
    /// fractional length, it is widened to preserve fidelity.
    pub fn with_context(mut self, ctx: Context) -> Decimal {
        let stored = self.digits.decimals();
        self.ctx = if ctx.decimals() < stored && self.kind == Kind::Normal {
            ctx.with_decimals(stored)
        } else {
            ctx
        };
        self
    }

    pub(crate) fn magnitude(&self) -> &DigitBuf {
        &self.digits
    }

    /// Context adopted by a binary operation: the left operand's, with
    /// `decimals` widened to cover both stored fractions.
    pub(crate) fn result_context(lhs: &Decimal, rhs: &Decimal) -> Context {
        let decimals = lhs.ctx.decimals()
            .max(lhs.digits.decimals())
            .max(rhs.digits.decimals());
        lhs.ctx.with_decimals(decimals)
    }

    /// Narrow the stored fraction to the context's precision and adopt
    /// that context.
    pub(crate) fn narrowed(&self, ctx: &Context) -> Decimal {
        if self.kind != Kind::Normal {
            let mut out = self.clone();
            out.ctx = ctx.clone();
            return out;
        }
        let mut digits = self.digits.clone();
        digits.narrow_to(ctx.decimals(), ctx.rounding_mode());
        Decimal::from_magnitude(self.sign, digits, ctx)
    }

    /// Absolute value
    pub fn abs(&self) -> Decimal {
        let mut out = self.clone();
        if out.sign == Sign::Minus {
            out.sign = Sign::Plus;
        }
        out
    }

    /// The value scaled by two
    pub fn double(&self) -> Decimal {
        if self.kind != Kind::Normal {
            return self.clone();
        }
        let digits = arithmetic::mul_by_digit(&self.digits, 2);
        Decimal::from_magnitude(self.sign, digits, &self.ctx)
    }

    /// Half the value, computed by a decimal-point shift of five times
    /// the magnitude
    pub fn half(&self) -> Decimal {
        if self.kind != Kind::Normal {
            return self.clone();
        }
        let mut digits = arithmetic::mul_by_digit(&self.digits, 5);
        digits.downscale(1);
        Decimal::from_magnitude(self.sign, digits, &self.ctx)
    }

    /// The value multiplied by itself
    pub fn square(&self) -> Decimal {
        self * self
    }

    /// -1, 0 or +1 by sign; NaN propagates
    pub fn signum(&self) -> Decimal {
        match self.kind {
            Kind::Nan => Decimal::nan_with_context(&self.ctx),
            _ if self.is_zero() => Decimal::zero().with_context(self.ctx.clone()),
            _ if self.sign == Sign::Minus => -Decimal::one().with_context(self.ctx.clone()),
            _ => Decimal::one().with_context(self.ctx.clone()),
        }
    }

    /// Largest integer not greater than the value
    pub fn floor(&self) -> Decimal {
        if self.kind != Kind::Normal {
            return self.clone();
        }
        let had_fraction = !self.digits.is_integral();
        let mut digits = self.digits.clone();
        digits.narrow_to(0, RoundingMode::TowardZero);
        let truncated = Decimal::from_magnitude(self.sign, digits, &self.ctx);
        if had_fraction && self.sign == Sign::Minus {
            truncated - Decimal::one()
        } else {
            truncated
        }
    }

    /// Smallest integer not less than the value
    pub fn ceil(&self) -> Decimal {
        if self.kind != Kind::Normal {
            return self.clone();
        }
        let had_fraction = !self.digits.is_integral();
        let mut digits = self.digits.clone();
        digits.narrow_to(0, RoundingMode::TowardZero);
        let truncated = Decimal::from_magnitude(self.sign, digits, &self.ctx);
        if had_fraction && self.sign != Sign::Minus {
            truncated + Decimal::one()
        } else {
            truncated
        }
    }

    /// Round to `places` fractional digits
    ///
    /// Half-up by default; truncates toward zero when the context's
    /// `trunc_not_round` flag is set.
    pub fn round(&self, places: usize) -> Decimal {
        if self.kind != Kind::Normal {
            return self.clone();
        }
        let mut digits = self.digits.clone();
        digits.narrow_to(places, self.ctx.rounding_mode());
        Decimal::from_magnitude(self.sign, digits, &self.ctx)
    }

    /// Drop the fraction toward zero
    pub(crate) fn trunc(&self) -> Decimal {
        if self.kind != Kind::Normal {
            return self.clone();
        }
        let mut digits = self.digits.clone();
        digits.narrow_to(0, RoundingMode::TowardZero);
        Decimal::from_magnitude(self.sign, digits, &self.ctx)
    }

    /// The value plus one
    pub fn inc(&self) -> Decimal {
        self + Decimal::one()
    }

    /// The value minus one
    pub fn dec(&self) -> Decimal {
        self - Decimal::one()
    }

    /// Quotient of `self / rhs`, surfacing division by zero as an error
    /// regardless of the context's `throw_on_error` flag.
    pub fn checked_div(&self, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        let ctx = Decimal::result_context(self, rhs);
        arithmetic::division::impl_div(self, rhs, &ctx)
    }

    /// Remainder of `self / rhs`, surfacing modulus by zero as an error
    /// regardless of the context's `throw_on_error` flag.
    pub fn checked_rem(&self, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        let ctx = Decimal::result_context(self, rhs);
        arithmetic::modulo::impl_rem(self, rhs, &ctx)
    }

    /// Resolve a fallible result against the context's error boundary:
    /// raised to the caller when `throw_on_error` is set, otherwise
    /// coerced to the given special value.
    pub(crate) fn or_special(
        result: Result<Decimal, DecimalError>,
        ctx: &Context,
        special: Decimal,
    ) -> Result<Decimal, DecimalError> {
        match result {
            Err(_) if !ctx.throw_on_error() => Ok(special.with_context(ctx.clone())),
            other => other,
        }
    }

    // ---- transcendental suite ----

    /// e raised to this value
    pub fn exp(&self) -> Decimal {
        functions::exp::impl_exp(self)
    }

    /// This value raised to `exponent`
    ///
    /// Integer exponents go through exponentiation by squaring;
    /// fractional exponents through `exp(y ln x)`. `0^0` and a negative
    /// base with a fractional exponent are illegal operations.
    pub fn pow(&self, exponent: &Decimal) -> Result<Decimal, DecimalError> {
        functions::exp::impl_pow(self, exponent)
    }

    /// Principal square root, as `pow(x, 0.5)`
    pub fn sqrt(&self) -> Result<Decimal, DecimalError> {
        functions::sqrt::impl_sqrt(self)
    }

    /// Length of the hypotenuse `sqrt(x^2 + y^2)`
    pub fn hypot(&self, other: &Decimal) -> Decimal {
        functions::sqrt::impl_hypot(self, other)
    }

    /// Natural logarithm
    pub fn ln(&self) -> Result<Decimal, DecimalError> {
        functions::log::impl_ln(self)
    }

    /// Logarithm of this value in base `base`
    pub fn log(&self, base: &Decimal) -> Result<Decimal, DecimalError> {
        functions::log::impl_log(base, self)
    }

    /// Base-2 logarithm
    pub fn log2(&self) -> Result<Decimal, DecimalError> {
        functions::log::impl_log2(self)
    }

    /// Base-10 logarithm
    pub fn log10(&self) -> Result<Decimal, DecimalError> {
        functions::log::impl_log10(self)
    }

    /// Reduce an angle into the phase interval `(-pi, pi]`
    pub fn trig_phase_correct(&self) -> Decimal {
        functions::trig::impl_phase_correct(self)
    }

    pub fn sin(&self) -> Decimal {
        functions::trig::impl_sin(self)
    }

    pub fn cos(&self) -> Decimal {
        functions::trig::impl_cos(self)
    }

    pub fn tan(&self) -> Result<Decimal, DecimalError> {
        functions::trig::impl_tan(self)
    }

    pub fn cot(&self) -> Result<Decimal, DecimalError> {
        functions::trig::impl_cot(self)
    }

    pub fn sec(&self) -> Result<Decimal, DecimalError> {
        functions::trig::impl_sec(self)
    }

    pub fn csc(&self) -> Result<Decimal, DecimalError> {
        functions::trig::impl_csc(self)
    }

    /// Inverse sine; arguments outside `[-1, 1]` are illegal
    pub fn asin(&self) -> Result<Decimal, DecimalError> {
        functions::inverse_trig::impl_asin(self)
    }

    /// Inverse cosine; arguments outside `[-1, 1]` are illegal
    pub fn acos(&self) -> Result<Decimal, DecimalError> {
        functions::inverse_trig::impl_acos(self)
    }

    pub fn atan(&self) -> Decimal {
        functions::inverse_trig::impl_atan(self)
    }

    /// Quadrant-aware angle of the point `(x, self)`
    pub fn atan2(&self, x: &Decimal) -> Decimal {
        functions::inverse_trig::impl_atan2(self, x)
    }

    pub fn acot(&self) -> Decimal {
        functions::inverse_trig::impl_acot(self)
    }

    /// Inverse secant; arguments inside `(-1, 1)` are illegal
    pub fn asec(&self) -> Result<Decimal, DecimalError> {
        functions::inverse_trig::impl_asec(self)
    }

    /// Inverse cosecant; arguments inside `(-1, 1)` are illegal
    pub fn acsc(&self) -> Result<Decimal, DecimalError> {
        functions::inverse_trig::impl_acsc(self)
    }

    pub fn sinh(&self) -> Decimal {
        functions::hyperbolic::impl_sinh(self)
    }

    pub fn cosh(&self) -> Decimal {
        functions::hyperbolic::impl_cosh(self)
    }

    pub fn tanh(&self) -> Decimal {
        functions::hyperbolic::impl_tanh(self)
    }

    pub fn coth(&self) -> Result<Decimal, DecimalError> {
        functions::hyperbolic::impl_coth(self)
    }

    pub fn sech(&self) -> Decimal {
        functions::hyperbolic::impl_sech(self)
    }

    pub fn csch(&self) -> Result<Decimal, DecimalError> {
        functions::hyperbolic::impl_csch(self)
    }

    pub fn asinh(&self) -> Decimal {
        functions::hyperbolic::impl_asinh(self)
    }

    /// Inverse hyperbolic cosine; arguments below 1 are illegal
    pub fn acosh(&self) -> Result<Decimal, DecimalError> {
        functions::hyperbolic::impl_acosh(self)
    }

    /// Inverse hyperbolic tangent; arguments outside `(-1, 1)` are illegal
    pub fn atanh(&self) -> Result<Decimal, DecimalError> {
        functions::hyperbolic::impl_atanh(self)
    }

    /// Inverse hyperbolic cotangent; arguments inside `[-1, 1]` are illegal
    pub fn acoth(&self) -> Result<Decimal, DecimalError> {
        functions::hyperbolic::impl_acoth(self)
    }

    /// Inverse hyperbolic secant; arguments outside `(0, 1]` are illegal
    pub fn asech(&self) -> Result<Decimal, DecimalError> {
        functions::hyperbolic::impl_asech(self)
    }

    /// Inverse hyperbolic cosecant; zero is illegal
    pub fn acsch(&self) -> Result<Decimal, DecimalError> {
        functions::hyperbolic::impl_acsch(self)
    }

    /// Gauss error function
    pub fn erf(&self) -> Decimal {
        functions::erf::impl_erf(self)
    }

    /// Factorial; negative or fractional arguments are illegal
    pub fn factorial(&self) -> Result<Decimal, DecimalError> {
        functions::factorial::impl_factorial(self)
    }

    /// Binomial expansion `(x + y)^n` for non-negative integer `n`
    pub fn binomial(x: &Decimal, y: &Decimal, n: &Decimal) -> Result<Decimal, DecimalError> {
        functions::factorial::impl_binomial(x, y, n)
    }

    /// Number of `k`-permutations of `n` items
    pub fn n_p_r(n: &Decimal, k: &Decimal) -> Result<Decimal, DecimalError> {
        functions::factorial::impl_n_p_r(n, k)
    }

    /// Number of `k`-combinations of `n` items
    pub fn n_c_r(n: &Decimal, k: &Decimal) -> Result<Decimal, DecimalError> {
        functions::factorial::impl_n_c_r(n, k)
    }
}


#[cfg(test)]
include!("lib.tests.rs");

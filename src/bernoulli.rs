//! Bernoulli number generator
//!
//! Exact-formula evaluation after Chowla and Hartung: the even
//! Bernoulli numbers come out of the alternating zeta sum
//!
//! `B_2m = (-1)^(m+1) 2 (2m)! η(2m) / ((1 - 2^(1-2m)) (2pi)^2m)`
//!
//! whose terms are rational and bounded, rather than through the
//! unstable Stirling approximation.

use crate::constants;
use crate::functions::exp::impl_pow_int;
use crate::functions::factorial::impl_factorial;
use crate::functions::working;
use crate::{Decimal, DecimalError, Sign, ToPrimitive};

/// Generator for the Bernoulli numbers `B_n` (not `B_2n`)
#[derive(Debug, Clone)]
pub struct Bernoulli {
    /// terms of the alternating zeta sum
    pub iterations: u32,
}

impl Default for Bernoulli {
    fn default() -> Bernoulli {
        Bernoulli { iterations: 40 }
    }
}

impl Bernoulli {
    pub fn new(iterations: u32) -> Bernoulli {
        Bernoulli { iterations }
    }

    /// The nth Bernoulli number at the argument's precision
    ///
    /// `n` must be a non-negative integer. `B_0 = 1`, `B_1 = -1/2`,
    /// and every other odd index is zero.
    pub fn term(&self, n: &Decimal) -> Result<Decimal, DecimalError> {
        let ctx = n.context().clone();

        if n.is_nan() {
            return Ok(Decimal::nan_with_context(&ctx));
        }
        let index = match ToPrimitive::to_u64(n) {
            Some(index) if n.is_int() && n.sign() != Sign::Minus => index,
            _ => {
                return Decimal::or_special(
                    Err(DecimalError::combinatoric_domain()),
                    &ctx,
                    Decimal::nan(),
                );
            }
        };

        if index == 0 {
            return Ok(Decimal::one().with_context(ctx));
        }
        if index == 1 {
            return Ok(-Decimal::one().half().with_context(ctx));
        }
        if index % 2 == 1 {
            return Ok(Decimal::zero().with_context(ctx));
        }

        let work = working(&ctx);
        let m = index / 2;

        // η(2m) = Σ (-1)^(j-1) / j^2m
        let one = Decimal::one().with_context(work.clone());
        let mut eta = Decimal::zero().with_context(work.clone());
        for j in 1..=u64::from(self.iterations) {
            let power = impl_pow_int(&Decimal::from(j).with_context(work.clone()), index as i64, &work);
            let term = (&one / &power).narrowed(&work);
            if term.is_zero() {
                break;
            }
            if j % 2 == 1 {
                eta += &term;
            } else {
                eta -= &term;
            }
        }

        // ζ(2m) = η(2m) / (1 - 2^(1-2m))
        let scale = &one - &impl_pow_int(&Decimal::from(2u8).with_context(work.clone()),
                                          1 - index as i64,
                                          &work);
        let zeta = (&eta / &scale).narrowed(&work);

        let two_m_factorial = impl_factorial(&Decimal::from(index).with_context(work.clone()))?;
        let two_pi_power = impl_pow_int(&constants::pi_value(&work).double(), index as i64, &work);

        let magnitude = ((&two_m_factorial.double() * &zeta) / &two_pi_power).narrowed(&ctx);
        if m % 2 == 1 {
            Ok(magnitude)
        } else {
            Ok(-magnitude)
        }
    }

    /// Convenience accessor with the default iteration budget
    pub fn nth(n: &Decimal) -> Result<Decimal, DecimalError> {
        Bernoulli::default().term(n)
    }
}

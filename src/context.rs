//! Define arithmetical context
//!

use crate::rounding::RoundingMode;

// const DEFAULT_DECIMALS: usize = ${RUST_FIXDECIMAL_DEFAULT_DECIMALS} or 40;
include!(concat!(env!("OUT_DIR"), "/default_decimals.rs"));


/// Mathematical context
///
/// Stores the tunable iteration counts and flags that every
/// variable-precision operation consults: how many error-corrected
/// fractional digits to keep, how many series terms each transcendental
/// runs, how division refines its quotient, and how the error boundary
/// behaves.
///
/// The default number of retained decimals is defined at compile time by
/// the `RUST_FIXDECIMAL_DEFAULT_DECIMALS` environment variable (40 when
/// unset).
///
/// Every [`Decimal`](crate::Decimal) carries its own context; results of
/// unary operations inherit it, binary operations adopt the left
/// operand's, widening `decimals` to cover both operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// minimum error-corrected fractional digits retained by operations;
    /// magnitudes past 10^decimals saturate to infinity
    decimals: usize,
    /// Taylor-series term count for e (and other entire-function series)
    e_terms: u32,
    /// Chudnovsky term count floor for 1/π
    pi_terms: u32,
    /// Newton-Raphson refinement rounds on the divisor reciprocal;
    /// zero disables refinement
    div_rounds: u32,
    /// series terms for ln
    ln_terms: u32,
    /// series terms for tanh and related
    tanh_terms: u32,
    /// iteration budget for the bootstrap square root
    sqrt_iters: u32,
    /// series terms for the trigonometric functions
    trig_terms: u32,
    /// narrow by truncation toward zero instead of rounding half-up
    trunc_not_round: bool,
    /// surface illegal operations as errors instead of special values
    throw_on_error: bool,
}

impl Context {
    /// Number of error-corrected fractional digits
    #[inline]
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    #[inline]
    pub fn e_terms(&self) -> u32 {
        self.e_terms
    }

    #[inline]
    pub fn pi_terms(&self) -> u32 {
        self.pi_terms
    }

    #[inline]
    pub fn div_rounds(&self) -> u32 {
        self.div_rounds
    }

    #[inline]
    pub fn ln_terms(&self) -> u32 {
        self.ln_terms
    }

    #[inline]
    pub fn tanh_terms(&self) -> u32 {
        self.tanh_terms
    }

    #[inline]
    pub fn sqrt_iters(&self) -> u32 {
        self.sqrt_iters
    }

    #[inline]
    pub fn trig_terms(&self) -> u32 {
        self.trig_terms
    }

    #[inline]
    pub fn trunc_not_round(&self) -> bool {
        self.trunc_not_round
    }

    #[inline]
    pub fn throw_on_error(&self) -> bool {
        self.throw_on_error
    }

    /// The rounding scheme the `trunc_not_round` flag selects
    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        if self.trunc_not_round {
            RoundingMode::TowardZero
        } else {
            RoundingMode::HalfUp
        }
    }

    /// Copy context with a new retained-decimals count
    pub fn with_decimals(&self, decimals: usize) -> Self {
        Self {
            decimals,
            ..self.clone()
        }
    }

    /// Copy context with a new e-series term count
    pub fn with_e_terms(&self, e_terms: u32) -> Self {
        Self {
            e_terms,
            ..self.clone()
        }
    }

    /// Copy context with a new Chudnovsky term floor
    pub fn with_pi_terms(&self, pi_terms: u32) -> Self {
        Self {
            pi_terms,
            ..self.clone()
        }
    }

    /// Copy context with a new reciprocal-refinement round count
    pub fn with_div_rounds(&self, div_rounds: u32) -> Self {
        Self {
            div_rounds,
            ..self.clone()
        }
    }

    /// Copy context with a new ln-series term count
    pub fn with_ln_terms(&self, ln_terms: u32) -> Self {
        Self {
            ln_terms,
            ..self.clone()
        }
    }

    /// Copy context with a new tanh-series term count
    pub fn with_tanh_terms(&self, tanh_terms: u32) -> Self {
        Self {
            tanh_terms,
            ..self.clone()
        }
    }

    /// Copy context with a new bootstrap-sqrt iteration budget
    pub fn with_sqrt_iters(&self, sqrt_iters: u32) -> Self {
        Self {
            sqrt_iters,
            ..self.clone()
        }
    }

    /// Copy context with a new trig-series term count
    pub fn with_trig_terms(&self, trig_terms: u32) -> Self {
        Self {
            trig_terms,
            ..self.clone()
        }
    }

    /// Copy context selecting truncation or half-up narrowing
    pub fn with_trunc_not_round(&self, trunc_not_round: bool) -> Self {
        Self {
            trunc_not_round,
            ..self.clone()
        }
    }

    /// Copy context selecting the error boundary behavior
    pub fn with_throw_on_error(&self, throw_on_error: bool) -> Self {
        Self {
            throw_on_error,
            ..self.clone()
        }
    }

    /// Copy context with `decimals` raised by a guard amount
    ///
    /// Internal series and division steps work a few digits wide of the
    /// requested precision before narrowing their final result.
    pub(crate) fn widened(&self, guard: usize) -> Self {
        self.with_decimals(self.decimals + guard)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            e_terms: 40,
            pi_terms: 1,
            div_rounds: 5,
            ln_terms: 40,
            tanh_terms: 40,
            sqrt_iters: 40,
            trig_terms: 5,
            trunc_not_round: false,
            throw_on_error: true,
        }
    }
}

//! Precomputed constant table
//!
//! A `Constants` instance materializes every stored constant at its
//! context's precision, in dependency order. The free computation
//! routines are shared with the function suite, which prefers direct
//! evaluation over building a whole table per call.

use crate::functions::log::ln_series;
use crate::functions::sqrt::{impl_sqrt, improvised_sqrt};
use crate::functions::working;
use crate::{Context, Decimal};

/// Decimal digits contributed by each Chudnovsky term
const CHUDNOVSKY_DIGITS_PER_TERM: usize = 14;

/// Taylor sum `e = Σ 1/n!` at the context's `e_terms`
pub(crate) fn e_value(ctx: &Context) -> Decimal {
    let work = working(ctx);

    let mut term = Decimal::one().with_context(work.clone());
    let mut sum = Decimal::one().with_context(work.clone());
    for n in 1..=ctx.e_terms() {
        term = &term / Decimal::from(n);
        if term.is_zero() {
            break;
        }
        sum += &term;
    }

    sum.narrowed(ctx)
}

/// Chudnovsky series for `1/pi`:
///
/// `1/pi = (12 / C^(3/2)) Σ (6k)! (B + A k) / ((3k)! (k!)^3 (-C^3)^k)`
///
/// with `A = 545140134`, `B = 13591409`, `C = 640320`. Each term buys
/// about fourteen digits, so the configured term count acts as a floor
/// under the amount needed to saturate the context's precision.
pub(crate) fn one_over_pi_value(ctx: &Context) -> Decimal {
    let work = working(ctx);

    let needed = (ctx.decimals() / CHUDNOVSKY_DIGITS_PER_TERM) as u32 + 2;
    let terms = ctx.pi_terms().max(needed);

    let a = Decimal::from(545140134u32).with_context(work.clone());
    let b = Decimal::from(13591409u32).with_context(work.clone());
    let c_cubed: u128 = 262_537_412_640_768_000;

    // running factor g_k = (6k)! / ((3k)! (k!)^3 (-C^3)^k)
    let mut g = Decimal::one().with_context(work.clone());
    let mut sum = b.clone();
    for k in 0..u128::from(terms - 1) {
        let numerator = (6 * k + 1)
            * (6 * k + 2)
            * (6 * k + 3)
            * (6 * k + 4)
            * (6 * k + 5)
            * (6 * k + 6);
        let denominator = (3 * k + 1) * (3 * k + 2) * (3 * k + 3) * (k + 1) * (k + 1) * (k + 1);

        g = -(&(&g * Decimal::from(numerator)) / Decimal::from(denominator * c_cubed));
        if g.is_zero() {
            break;
        }

        let k_next = Decimal::from(k + 1).with_context(work.clone());
        sum += &(&g * &(&b + &(&a * &k_next)));
    }

    // C^(3/2) = C sqrt(C)
    let c = Decimal::from(640320u32).with_context(work.clone());
    let c_three_halves = &c * &improvised_sqrt(&c, &work);

    ((&sum * Decimal::from(12u8)) / &c_three_halves).narrowed(ctx)
}

/// `pi` as the reciprocal of the Chudnovsky sum
pub(crate) fn pi_value(ctx: &Context) -> Decimal {
    let work = working(ctx);
    let inverse = one_over_pi_value(&work);
    (Decimal::one().with_context(work) / &inverse).narrowed(ctx)
}

/// `ln 2` by direct series expansion at 2
pub(crate) fn ln2_value(ctx: &Context) -> Decimal {
    let work = working(ctx);
    let two = Decimal::from(2u8).with_context(work.clone());
    ln_series(&two, ctx.ln_terms()).narrowed(ctx)
}

/// `2 / sqrt(pi)`, the scale factor of the error function
pub(crate) fn two_over_sqrt_pi_value(ctx: &Context) -> Decimal {
    let work = working(ctx);
    let root = improvised_sqrt(&pi_value(&work), &work);
    (Decimal::from(2u8).with_context(work) / &root).narrowed(ctx)
}

/// Table of constants generated at one precision configuration
///
/// Accessors hand out independent copies; rebuild the table to change
/// precision.
#[derive(Debug, Clone)]
pub struct Constants {
    ctx: Context,
    e: Decimal,
    pi: Decimal,
    one_over_pi: Decimal,
    pi_over_2: Decimal,
    pi_over_4: Decimal,
    two_pi: Decimal,
    two_over_pi: Decimal,
    two_over_sqrt_pi: Decimal,
    ln_2: Decimal,
    ln_10: Decimal,
    log2_e: Decimal,
    log10_e: Decimal,
    sqrt_2: Decimal,
    one_over_sqrt_2: Decimal,
}

impl Constants {
    /// Generate every constant at the given context
    pub fn new(ctx: Context) -> Constants {
        let work = working(&ctx);
        let one = Decimal::one().with_context(work.clone());

        let e = e_value(&ctx);
        let one_over_pi = one_over_pi_value(&ctx);
        let pi = pi_value(&ctx);
        let pi_over_2 = pi.half();
        let pi_over_4 = pi_over_2.half();
        let two_pi = pi.double();
        let two_over_pi = one_over_pi.double();
        let two_over_sqrt_pi = two_over_sqrt_pi_value(&ctx);

        let ln_2 = ln2_value(&ctx);
        let ln_10 = Decimal::from(10u8)
            .with_context(work.clone())
            .ln()
            .expect("logarithm of a positive constant")
            .narrowed(&ctx);

        // ln e = 1, so the based logarithms of e are plain reciprocals
        let log2_e = (&one / &ln2_value(&work)).narrowed(&ctx);
        let log10_e = {
            let wide_ln_10 = Decimal::from(10u8)
                .with_context(work.clone())
                .ln()
                .expect("logarithm of a positive constant");
            (&one / &wide_ln_10).narrowed(&ctx)
        };

        let sqrt_2 = impl_sqrt(&Decimal::from(2u8).with_context(work.clone()))
            .expect("square root of a positive constant")
            .narrowed(&ctx);
        let one_over_sqrt_2 = (&one / &sqrt_2).narrowed(&ctx);

        Constants {
            ctx,
            e,
            pi,
            one_over_pi,
            pi_over_2,
            pi_over_4,
            two_pi,
            two_over_pi,
            two_over_sqrt_pi,
            ln_2,
            ln_10,
            log2_e,
            log10_e,
            sqrt_2,
            one_over_sqrt_2,
        }
    }

    /// The context the table was generated at
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn e(&self) -> Decimal {
        self.e.clone()
    }

    pub fn pi(&self) -> Decimal {
        self.pi.clone()
    }

    pub fn one_over_pi(&self) -> Decimal {
        self.one_over_pi.clone()
    }

    pub fn pi_over_2(&self) -> Decimal {
        self.pi_over_2.clone()
    }

    pub fn pi_over_4(&self) -> Decimal {
        self.pi_over_4.clone()
    }

    pub fn two_pi(&self) -> Decimal {
        self.two_pi.clone()
    }

    pub fn two_over_pi(&self) -> Decimal {
        self.two_over_pi.clone()
    }

    pub fn two_over_sqrt_pi(&self) -> Decimal {
        self.two_over_sqrt_pi.clone()
    }

    pub fn ln_2(&self) -> Decimal {
        self.ln_2.clone()
    }

    pub fn ln_10(&self) -> Decimal {
        self.ln_10.clone()
    }

    pub fn log2_e(&self) -> Decimal {
        self.log2_e.clone()
    }

    pub fn log10_e(&self) -> Decimal {
        self.log10_e.clone()
    }

    pub fn sqrt_2(&self) -> Decimal {
        self.sqrt_2.clone()
    }

    pub fn one_over_sqrt_2(&self) -> Decimal {
        self.one_over_sqrt_2.clone()
    }
}

impl Default for Constants {
    fn default() -> Constants {
        Constants::new(Context::default())
    }
}

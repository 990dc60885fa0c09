//! square root implementation

use crate::functions::exp::impl_pow;
use crate::functions::working;
use crate::{Context, Decimal, DecimalError, Sign};

/// Principal square root as `pow(x, 0.5)`
pub(crate) fn impl_sqrt(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.sign() == Sign::Minus {
        return Decimal::or_special(Err(DecimalError::sqrt_of_negative()), &ctx, Decimal::nan());
    }
    if x.is_inf() {
        return Ok(Decimal::infinity().with_context(ctx));
    }
    if x.is_zero() {
        return Ok(Decimal::zero().with_context(ctx));
    }

    let half = Decimal::one().half();
    impl_pow(x, &half)
}

/// Newton's method square root on rational operations only
///
/// `r = (r + x/r) / 2`, seeded from the float approximation when one
/// exists. Constants bootstrapping uses this to stay off the
/// `pow`/`ln` path entirely.
pub(crate) fn improvised_sqrt(x: &Decimal, ctx: &Context) -> Decimal {
    debug_assert!(!x.is_nan() && x.sign() != Sign::Minus);

    if x.is_zero() || x.is_inf() {
        return x.clone().with_context(ctx.clone());
    }

    let work = working(ctx);
    let x_work = x.clone().with_context(work.clone());

    let approx = x.approx_f64().sqrt();
    let mut r = if approx.is_finite() && approx > 0.0 {
        Decimal::from(approx).with_context(work.clone())
    } else {
        // seed from the digit count: sqrt(10^n) ~ 10^(n/2)
        let half_width = (x.ints() / 2).max(1);
        let mut seed = crate::digitbuf::DigitBuf::single(1);
        for _ in 0..half_width {
            seed.push_back(0);
        }
        Decimal::from_magnitude(Sign::Plus, seed, &work)
    };

    let mut prev = Decimal::zero();
    for _ in 0..ctx.sqrt_iters() {
        if r == prev {
            break;
        }
        prev = r.clone();
        r = (&r + &(&x_work / &r)).half().narrowed(&work);
    }

    r.narrowed(ctx)
}

/// Hypotenuse `sqrt(x^2 + y^2)`
pub(crate) fn impl_hypot(x: &Decimal, y: &Decimal) -> Decimal {
    let ctx = Decimal::result_context(x, y);
    let sum = &x.square() + &y.square();
    impl_sqrt(&sum.with_context(ctx))
        .unwrap_or_else(|_| Decimal::nan())
}

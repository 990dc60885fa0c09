//! natural and based logarithms

use crate::functions::working;
use crate::{Decimal, DecimalError, Sign};

/// Series for `ln(x)` at any positive argument:
/// `ln(x) = 2 Σ t^(2k+1) / (2k+1)` with `t = (x-1)/(x+1)`.
///
/// Convergence is fastest for `x` near 1; callers reduce their
/// argument before expanding.
pub(crate) fn ln_series(x: &Decimal, terms: u32) -> Decimal {
    let work = x.context().clone();
    let one = Decimal::one().with_context(work.clone());

    let t = ((x - &one) / (x + &one)).narrowed(&work);
    if t.is_zero() {
        return Decimal::zero().with_context(work);
    }
    let t_squared = t.square().narrowed(&work);

    let mut power = t.clone();
    let mut sum = t;
    for k in 1..terms {
        power = (&power * &t_squared).narrowed(&work);
        if power.is_zero() {
            break;
        }
        sum += &(&power / Decimal::from(2 * k + 1));
    }

    sum.double()
}

/// Natural logarithm
///
/// The argument is reduced to `m * 2^k` with `m` in `[1, 2)` by
/// repeated halving or doubling, the series is expanded at `m`, and
/// `k ln 2` (itself a direct series expansion at 2) is added back.
pub(crate) fn impl_ln(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_inf() {
        if x.sign() == Sign::Minus {
            return Decimal::or_special(Err(DecimalError::log_non_positive()), &ctx, Decimal::nan());
        }
        return Ok(Decimal::infinity().with_context(ctx));
    }
    if x.is_zero() || x.sign() == Sign::Minus {
        return Decimal::or_special(Err(DecimalError::log_non_positive()), &ctx, Decimal::nan());
    }

    // the halving loop must neither saturate a wide integer part nor
    // underflow a deep fraction, so the working precision covers the
    // operand's full stored width
    let wide = ctx.decimals().max(x.ints()).max(x.decimals());
    let work = working(&ctx.with_decimals(wide));
    let one = Decimal::one().with_context(work.clone());
    let two = Decimal::from(2).with_context(work.clone());

    let mut m = x.clone().with_context(work.clone());
    let mut k = 0i64;
    while m >= two {
        m = m.half().narrowed(&work);
        k += 1;
    }
    while m < one {
        m = m.double().narrowed(&work);
        k -= 1;
    }

    let mut result = ln_series(&m, ctx.ln_terms());
    if k != 0 {
        let ln_two = ln_series(&two, ctx.ln_terms());
        result += &(&ln_two * Decimal::from(k));
    }

    Ok(result.narrowed(&ctx))
}

/// Logarithm of `x` in base `b`, as `ln(x) / ln(b)`
pub(crate) fn impl_log(base: &Decimal, x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = Decimal::result_context(x, base);
    let work = working(&ctx);

    let ln_x = impl_ln(&x.clone().with_context(work.clone()))?;
    let ln_base = impl_ln(&base.clone().with_context(work.clone()))?;

    let quotient = Decimal::or_special(ln_x.checked_div(&ln_base), &ctx, Decimal::nan())?;
    Ok(quotient.narrowed(&ctx))
}

/// Base-2 logarithm via the cached-constant quotient `ln(x) / ln(2)`
pub(crate) fn impl_log2(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();
    let work = working(&ctx);

    let ln_x = impl_ln(&x.clone().with_context(work.clone()))?;
    let ln_two = ln_series(&Decimal::from(2).with_context(work.clone()), ctx.ln_terms());
    Ok((&ln_x / &ln_two).narrowed(&ctx))
}

/// Base-10 logarithm via the cached-constant quotient `ln(x) / ln(10)`
pub(crate) fn impl_log10(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();
    let work = working(&ctx);

    let ln_x = impl_ln(&x.clone().with_context(work.clone()))?;
    let ln_ten = impl_ln(&Decimal::from(10).with_context(work.clone()))
        .expect("logarithm of a positive constant");
    Ok((&ln_x / &ln_ten).narrowed(&ctx))
}

#[cfg(test)]
mod test {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn ln_of_one_is_zero() {
        assert_eq!(Decimal::one().ln().unwrap().to_string(), "0");
    }

    #[test]
    fn ln_of_two() {
        // ln 2 = 0.6931471805599453094172321214581765680755...
        let ln2 = dec("2").ln().unwrap();
        assert!(ln2.to_string().starts_with("0.693147180559945309417232121458176568075"));
    }

    #[test]
    fn ln_of_ten() {
        // ln 10 = 2.302585092994045684017991454684364207601...
        let ln10 = dec("10").ln().unwrap();
        assert!(ln10.to_string().starts_with("2.30258509299404568401799145468436420760"));
    }

    #[test]
    fn ln_of_fraction_is_negative() {
        // ln 0.5 = -ln 2
        let a = dec("0.5").ln().unwrap();
        let b = dec("2").ln().unwrap();
        let error = (&a + &b).abs();
        assert!(error < dec("1e-38"), "ln(0.5) + ln(2) = {}", error);
    }

    #[test]
    fn ln_domain_violations() {
        assert!(Decimal::zero().ln().is_err());
        assert!(dec("-3").ln().is_err());
        assert!(Decimal::neg_infinity().ln().is_err());

        let lenient = Context::default().with_throw_on_error(false);
        assert!(dec("-3").with_context(lenient).ln().unwrap().is_nan());
    }

    #[test]
    fn ln_of_specials() {
        assert!(Decimal::nan().ln().unwrap().is_nan());
        assert!(Decimal::infinity().ln().unwrap().is_inf());
    }

    #[test]
    fn log_bases() {
        let thousand = dec("1000");
        let log = thousand.log10().unwrap();
        let error = (&log - dec("3")).abs();
        assert!(error < dec("1e-35"), "log10(1000) = {}", log);

        let eight = dec("8");
        let log = eight.log2().unwrap();
        let error = (&log - dec("3")).abs();
        assert!(error < dec("1e-35"), "log2(8) = {}", log);

        let x = dec("81");
        let log = x.log(&dec("3")).unwrap();
        let error = (&log - dec("4")).abs();
        assert!(error < dec("1e-35"), "log3(81) = {}", log);
    }

    #[test]
    fn log_base_one_is_illegal() {
        assert!(dec("5").log(&Decimal::one()).is_err());
    }

    #[test]
    fn ln_of_extreme_magnitudes() {
        // 400 ln 10 = 921.0340371976182736071965818737456830404...
        let big = dec("1e400").ln().unwrap();
        let reference = dec("921.03403719761827360719658187374568304");
        let error = (&big - &reference).abs();
        assert!(error < dec("1e-30"), "ln(1e400) = {}", big);

        let small = dec("1e-400").ln().unwrap();
        let error = (&small + &reference).abs();
        assert!(error < dec("1e-30"), "ln(1e-400) = {}", small);
    }
}

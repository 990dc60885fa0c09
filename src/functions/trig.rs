//! trigonometric functions

use crate::arithmetic::division::division_special;
use crate::constants;
use crate::functions::working;
use crate::{Decimal, DecimalError};

/// Reduce an angle into `(-pi, pi]` by subtracting multiples of two pi
pub(crate) fn impl_phase_correct(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() || x.is_inf() {
        return Decimal::nan_with_context(&ctx);
    }

    let work = working(&ctx);
    let pi = constants::pi_value(&work);
    if x.abs() < pi {
        return x.clone();
    }

    let x_work = x.clone().with_context(work.clone());
    let two_pi = pi.double();

    // n = ceil((x - pi) / 2pi) maps x into (-pi, pi]
    let n = ((&x_work - &pi) / &two_pi).ceil();
    (&x_work - &(&n * &two_pi)).narrowed(&ctx)
}

/// Taylor sum for sine after phase reduction:
/// `sin(x) = Σ (-1)^n x^(2n+1) / (2n+1)!`
pub(crate) fn impl_sin(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() || x.is_inf() {
        return Decimal::nan_with_context(&ctx);
    }

    let work = working(&ctx);
    let reduced = impl_phase_correct(x).with_context(work.clone());
    let x_squared = reduced.square().narrowed(&work);

    let mut term = reduced.clone();
    let mut sum = reduced;
    for n in 1..ctx.trig_terms() {
        // (2n)(2n+1) extends the factorial, the sign alternates
        let step = 2 * n * (2 * n + 1);
        term = -((&term * &x_squared) / Decimal::from(step));
        if term.is_zero() {
            break;
        }
        sum += &term;
    }

    sum.narrowed(&ctx)
}

/// Taylor sum for cosine after phase reduction:
/// `cos(x) = Σ (-1)^n x^(2n) / (2n)!`
pub(crate) fn impl_cos(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() || x.is_inf() {
        return Decimal::nan_with_context(&ctx);
    }

    let work = working(&ctx);
    let reduced = impl_phase_correct(x).with_context(work.clone());
    let x_squared = reduced.square().narrowed(&work);

    let mut term = Decimal::one().with_context(work.clone());
    let mut sum = Decimal::one().with_context(work.clone());
    for n in 1..ctx.trig_terms() {
        let step = (2 * n - 1) * (2 * n);
        term = -((&term * &x_squared) / Decimal::from(step));
        if term.is_zero() {
            break;
        }
        sum += &term;
    }

    sum.narrowed(&ctx)
}

/// `tan = sin / cos`; the quotient collapses per the division rules at
/// the poles
pub(crate) fn impl_tan(x: &Decimal) -> Result<Decimal, DecimalError> {
    trig_quotient(x, impl_sin(x), impl_cos(x))
}

/// `cot = cos / sin`
pub(crate) fn impl_cot(x: &Decimal) -> Result<Decimal, DecimalError> {
    trig_quotient(x, impl_cos(x), impl_sin(x))
}

/// `sec = 1 / cos`
pub(crate) fn impl_sec(x: &Decimal) -> Result<Decimal, DecimalError> {
    trig_quotient(x, Decimal::one(), impl_cos(x))
}

/// `csc = 1 / sin`
pub(crate) fn impl_csc(x: &Decimal) -> Result<Decimal, DecimalError> {
    trig_quotient(x, Decimal::one(), impl_sin(x))
}

fn trig_quotient(
    x: &Decimal,
    numerator: Decimal,
    denominator: Decimal,
) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();
    let special = division_special(&numerator, &ctx);
    let quotient = Decimal::or_special(
        numerator.with_context(ctx.clone()).checked_div(&denominator),
        &ctx,
        special,
    )?;
    Ok(quotient.narrowed(&ctx))
}

#[cfg(test)]
mod test {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// wide enough series budget for 40-digit trig identities
    fn trig_ctx() -> Context {
        Context::default().with_trig_terms(60)
    }

    #[test]
    fn sin_of_zero() {
        assert_eq!(Decimal::zero().sin().to_string(), "0");
    }

    #[test]
    fn cos_of_zero() {
        assert_eq!(Decimal::zero().cos().to_string(), "1");
    }

    #[test]
    fn sin_of_one() {
        // sin 1 = 0.8414709848078965066525023216302989996226...
        let s = dec("1").with_context(trig_ctx()).sin();
        assert!(s.to_string().starts_with("0.84147098480789650665250232163029899"));
    }

    #[test]
    fn cos_of_one() {
        // cos 1 = 0.5403023058681397174009366074429766037323...
        let c = dec("1").with_context(trig_ctx()).cos();
        assert!(c.to_string().starts_with("0.54030230586813971740093660744297660"));
    }

    #[test]
    fn sin_is_odd() {
        let pos = dec("0.7").with_context(trig_ctx()).sin();
        let neg = dec("-0.7").with_context(trig_ctx()).sin();
        assert_eq!((&pos + &neg).to_string(), "0");
    }

    #[test]
    fn pythagorean_identity() {
        for angle in ["0.1", "0.5", "1", "1.5", "-1.2"] {
            let x = dec(angle).with_context(trig_ctx());
            let identity = &x.sin().square() + &x.cos().square();
            let error = (&identity - &Decimal::one()).abs();
            assert!(error < dec("1e-38"), "sin^2+cos^2 at {} = {}", angle, identity);
        }
    }

    #[test]
    fn phase_reduction_wraps_large_angles() {
        // 7 - 2pi = 0.7168146928204138...
        let wrapped = dec("7").trig_phase_correct();
        assert!(wrapped.to_string().starts_with("0.71681469282"));

        // within range values pass through untouched
        let small = dec("1.5");
        assert_eq!(small.trig_phase_correct().to_string(), "1.5");

        let negative = dec("-10");
        // -10 + 4pi = 2.566370614359172...
        assert!(negative.trig_phase_correct().to_string().starts_with("2.56637061435"));
    }

    #[test]
    fn sin_agrees_after_phase_wrap() {
        let a = dec("7").with_context(trig_ctx()).sin();
        let b = dec("0.7168146928204138").with_context(trig_ctx()).sin();
        let error = (&a - &b).abs();
        assert!(error < dec("1e-15"), "wrapped sin differs: {}", error);
    }

    #[test]
    fn tan_and_reciprocals() {
        let x = dec("0.5").with_context(trig_ctx());

        let tan = x.tan().unwrap();
        // tan 0.5 = 0.5463024898437905132551794657802853832975...
        assert!(tan.to_string().starts_with("0.546302489843790513255179465780"));

        let cot = x.cot().unwrap();
        let product = &tan * &cot;
        let error = (&product - &Decimal::one()).abs();
        assert!(error < dec("1e-37"), "tan*cot = {}", product);

        let sec = x.sec().unwrap();
        let csc = x.csc().unwrap();
        assert!(sec > Decimal::one());
        assert!(csc > Decimal::one());
    }

    #[test]
    fn csc_of_zero_is_illegal() {
        assert!(Decimal::zero().csc().is_err());
        assert!(Decimal::zero().cot().is_err());

        let lenient = Context::default().with_throw_on_error(false);
        let zero = Decimal::zero().with_context(lenient);
        assert!(zero.csc().unwrap().is_inf());
    }

    #[test]
    fn trig_of_specials() {
        assert!(Decimal::nan().sin().is_nan());
        assert!(Decimal::infinity().cos().is_nan());
        assert!(Decimal::neg_infinity().trig_phase_correct().is_nan());
    }
}

//! inverse trigonometric functions

use crate::constants;
use crate::functions::sqrt::improvised_sqrt;
use crate::functions::working;
use crate::{Decimal, DecimalError, Sign};

/// Gregory series `atan(x) = Σ (-1)^n x^(2n+1) / (2n+1)` for |x| <= 1,
/// reflected through `atan(x) = ±pi/2 - atan(1/x)` beyond.
pub(crate) fn impl_atan(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }

    let work = working(&ctx);
    if x.is_inf() {
        let half_pi = constants::pi_value(&work).half();
        let quarter_turn = half_pi.narrowed(&ctx);
        return if x.sign() == Sign::Minus { -quarter_turn } else { quarter_turn };
    }

    let one = Decimal::one();
    if x.abs() > one {
        // atan(x) = sign(x) pi/2 - atan(1/x)
        let x_work = x.clone().with_context(work.clone());
        let reciprocal = (Decimal::one().with_context(work.clone()) / &x_work).narrowed(&work);
        let half_pi = constants::pi_value(&work).half();
        let reflected = if x.sign() == Sign::Minus {
            &(-&half_pi) - &atan_reduced(&reciprocal, 0)
        } else {
            &half_pi - &atan_reduced(&reciprocal, 0)
        };
        return reflected.narrowed(&ctx);
    }

    let x_work = x.clone().with_context(work.clone());
    atan_reduced(&x_work, 0).narrowed(&ctx)
}

/// Pull the argument under 1/2 with the half-angle identity
/// `atan(x) = 2 atan(x / (1 + sqrt(1 + x^2)))` before expanding;
/// near |x| = 1 the raw series crawls.
fn atan_reduced(x: &Decimal, depth: u32) -> Decimal {
    let work = x.context().clone();

    let threshold = Decimal::one().half();
    if x.abs() <= threshold || depth >= 4 {
        return atan_series(x);
    }

    let one = Decimal::one().with_context(work.clone());
    let radicand = &one + &x.square().narrowed(&work);
    let root = improvised_sqrt(&radicand, &work);
    let reduced = (x / &(&one + &root)).narrowed(&work);
    atan_reduced(&reduced, depth + 1).double()
}

/// The alternating series itself; convergence needs |x| < 1
fn atan_series(x: &Decimal) -> Decimal {
    let work = x.context().clone();
    let terms = x.context().trig_terms();

    let x_squared = x.square().narrowed(&work);
    let mut power = x.clone();
    let mut sum = x.clone();
    for n in 1..terms {
        power = -((&power * &x_squared).narrowed(&work));
        if power.is_zero() {
            break;
        }
        sum += &(&power / Decimal::from(2 * n + 1));
    }
    sum
}

/// `asin(x) = atan(x / sqrt(1 - x^2))`; |x| = 1 maps straight to ±pi/2
pub(crate) fn impl_asin(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }

    let one = Decimal::one();
    if x.abs() > one || x.is_inf() {
        return Decimal::or_special(Err(DecimalError::inverse_trig_domain()), &ctx, Decimal::nan());
    }

    let work = working(&ctx);
    if x.abs() == one {
        let half_pi = constants::pi_value(&work).half().narrowed(&ctx);
        return Ok(if x.sign() == Sign::Minus { -half_pi } else { half_pi });
    }

    let x_work = x.clone().with_context(work.clone());
    let radicand = &Decimal::one().with_context(work.clone()) - &x_work.square().narrowed(&work);
    let root = improvised_sqrt(&radicand, &work);
    if root.is_zero() {
        // the radicand underflowed: the argument is 1 to working precision
        let half_pi = constants::pi_value(&work).half().narrowed(&ctx);
        return Ok(if x.sign() == Sign::Minus { -half_pi } else { half_pi });
    }
    let ratio = (&x_work / &root).narrowed(&work);
    Ok(impl_atan(&ratio).narrowed(&ctx))
}

/// `acos(x) = pi/2 - asin(x)`
pub(crate) fn impl_acos(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }

    let work = working(&ctx);
    let asin = impl_asin(&x.clone().with_context(work.clone()))?;
    if asin.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    let half_pi = constants::pi_value(&work).half();
    Ok((&half_pi - &asin).narrowed(&ctx))
}

/// Quadrant-resolved angle of the point `(x, y)`
pub(crate) fn impl_atan2(y: &Decimal, x: &Decimal) -> Decimal {
    let ctx = Decimal::result_context(y, x);

    if y.is_nan() || x.is_nan() || (y.is_inf() && x.is_inf()) {
        return Decimal::nan_with_context(&ctx);
    }

    let work = working(&ctx);

    if y.is_inf() {
        let half_pi = constants::pi_value(&work).half().narrowed(&ctx);
        return if y.sign() == Sign::Minus { -half_pi } else { half_pi };
    }
    if x.is_inf() {
        if x.sign() == Sign::Minus {
            let pi = constants::pi_value(&work).narrowed(&ctx);
            return if y.sign() == Sign::Minus { -pi } else { pi };
        }
        return Decimal::zero().with_context(ctx);
    }

    if x.is_zero() {
        if y.is_zero() {
            return Decimal::zero().with_context(ctx);
        }
        let half_pi = constants::pi_value(&work).half().narrowed(&ctx);
        return if y.sign() == Sign::Minus { -half_pi } else { half_pi };
    }

    let y_work = y.clone().with_context(work.clone());
    let x_work = x.clone().with_context(work.clone());
    let base = impl_atan(&(&y_work / &x_work).narrowed(&work));

    if x.sign() == Sign::Minus {
        let pi = constants::pi_value(&work);
        let shifted = if y.sign() == Sign::Minus { &base - &pi } else { &base + &pi };
        return shifted.narrowed(&ctx);
    }
    base.narrowed(&ctx)
}

/// `acot(x) = atan(1/x)`; zero maps to pi/2
pub(crate) fn impl_acot(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    if x.is_inf() {
        return Decimal::zero().with_context(ctx);
    }
    if x.is_zero() {
        let work = working(&ctx);
        return constants::pi_value(&work).half().narrowed(&ctx);
    }

    let work = working(&ctx);
    let reciprocal = (Decimal::one().with_context(work.clone()) / &x.clone().with_context(work.clone()))
        .narrowed(&work);
    impl_atan(&reciprocal).narrowed(&ctx)
}

/// `asec(x) = acos(1/x)` for |x| >= 1
pub(crate) fn impl_asec(x: &Decimal) -> Result<Decimal, DecimalError> {
    reciprocal_inverse(x, impl_acos)
}

/// `acsc(x) = asin(1/x)` for |x| >= 1
pub(crate) fn impl_acsc(x: &Decimal) -> Result<Decimal, DecimalError> {
    reciprocal_inverse(x, impl_asin)
}

fn reciprocal_inverse(
    x: &Decimal,
    inner: fn(&Decimal) -> Result<Decimal, DecimalError>,
) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_inf() {
        let zero = Decimal::zero().with_context(working(&ctx));
        return Ok(inner(&zero)?.narrowed(&ctx));
    }
    if x.abs() < Decimal::one() {
        return Decimal::or_special(Err(DecimalError::inverse_trig_domain()), &ctx, Decimal::nan());
    }

    let work = working(&ctx);
    let reciprocal = (Decimal::one().with_context(work.clone()) / &x.clone().with_context(work.clone()))
        .narrowed(&work);
    Ok(inner(&reciprocal)?.narrowed(&ctx))
}

#[cfg(test)]
mod test {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// atan's Gregory series converges slowly near |x| = 1
    fn wide_ctx() -> Context {
        Context::default().with_trig_terms(200)
    }

    #[test]
    fn atan_of_zero() {
        assert_eq!(Decimal::zero().atan().to_string(), "0");
    }

    #[test]
    fn atan_of_small_argument() {
        // atan 0.5 = 0.4636476090008061162142562314612144020285...
        let a = dec("0.5").with_context(wide_ctx()).atan();
        assert!(a.to_string().starts_with("0.46364760900080611621425623146121"));
    }

    #[test]
    fn atan_reflects_beyond_one() {
        // atan(2) = pi/2 - atan(0.5) = 1.1071487177940905030170654601785370...
        let a = dec("2").with_context(wide_ctx()).atan();
        assert!(a.to_string().starts_with("1.107148717794090503017065460178"));

        let b = dec("-2").with_context(wide_ctx()).atan();
        assert!(b.to_string().starts_with("-1.107148717794090503017065460178"));
    }

    #[test]
    fn atan_of_infinities() {
        let a = Decimal::infinity().atan();
        assert!(a.to_string().starts_with("1.5707963267948966"));
        let b = Decimal::neg_infinity().atan();
        assert!(b.to_string().starts_with("-1.5707963267948966"));
    }

    #[test]
    fn asin_and_acos() {
        // asin 0.5 = pi/6 = 0.5235987755982988730771072305465838140329...
        let a = dec("0.5").with_context(wide_ctx()).asin().unwrap();
        assert!(a.to_string().starts_with("0.52359877559829887307710723054"));

        // acos 0.5 = pi/3
        let b = dec("0.5").with_context(wide_ctx()).acos().unwrap();
        assert!(b.to_string().starts_with("1.04719755119659774615421446109"));

        // boundary arguments skip the series entirely
        let c = dec("1").asin().unwrap();
        assert!(c.to_string().starts_with("1.5707963267948966"));
        let d = dec("-1").asin().unwrap();
        assert!(d.to_string().starts_with("-1.5707963267948966"));
    }

    #[test]
    fn asin_domain() {
        assert!(dec("1.5").asin().is_err());
        assert!(dec("-1.01").acos().is_err());

        let lenient = Context::default().with_throw_on_error(false);
        assert!(dec("2").with_context(lenient).asin().unwrap().is_nan());
    }

    #[test]
    fn atan2_quadrants() {
        let ctx = wide_ctx();
        let y = dec("1").with_context(ctx.clone());
        let x = dec("1").with_context(ctx.clone());

        // first quadrant: pi/4
        let q1 = y.atan2(&x);
        assert!(q1.to_string().starts_with("0.78539816339744830961"));

        // second quadrant: 3pi/4
        let q2 = y.atan2(&-&x);
        assert!(q2.to_string().starts_with("2.35619449019234492884"));

        // third quadrant: -3pi/4
        let q3 = (-&y).atan2(&-&x);
        assert!(q3.to_string().starts_with("-2.35619449019234492884"));

        // fourth quadrant: -pi/4
        let q4 = (-&y).atan2(&x);
        assert!(q4.to_string().starts_with("-0.78539816339744830961"));
    }

    #[test]
    fn atan2_axes() {
        let zero = Decimal::zero();
        let one = dec("1");

        assert!(one.atan2(&zero).to_string().starts_with("1.5707963267948966"));
        assert!((-&one).atan2(&zero).to_string().starts_with("-1.5707963267948966"));
        assert_eq!(zero.atan2(&one).to_string(), "0");
        assert_eq!(zero.atan2(&zero).to_string(), "0");
        // negative x axis: pi
        assert!(zero.atan2(&-&one).to_string().starts_with("3.14159265358979"));
    }

    #[test]
    fn atan2_recovers_angle() {
        let ctx = wide_ctx();
        for angle in ["0.5", "2.5", "-2.5", "-0.5"] {
            let theta = dec(angle).with_context(ctx.clone());
            let recovered = theta.sin().atan2(&theta.cos());
            let error = (&recovered - &theta).abs();
            assert!(error < dec("1e-30"), "atan2 at {} = {}", angle, recovered);
        }
    }

    #[test]
    fn reciprocal_inverses() {
        // acot(1) = pi/4
        let a = dec("1").with_context(wide_ctx()).acot();
        assert!(a.to_string().starts_with("0.78539816339744830961"));

        // asec(2) = acos(0.5) = pi/3
        let b = dec("2").with_context(wide_ctx()).asec().unwrap();
        assert!(b.to_string().starts_with("1.04719755119659774615"));

        // acsc(2) = asin(0.5) = pi/6
        let c = dec("2").with_context(wide_ctx()).acsc().unwrap();
        assert!(c.to_string().starts_with("0.52359877559829887307"));

        assert!(dec("0.5").asec().is_err());
        assert!(Decimal::zero().acot().to_string().starts_with("1.5707963267948966"));
    }
}

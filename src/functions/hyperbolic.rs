//! hyperbolic functions and their inverses

use crate::functions::exp::impl_exp;
use crate::functions::log::impl_ln;
use crate::functions::sqrt::improvised_sqrt;
use crate::functions::working;
use crate::{Context, Decimal, DecimalError, Sign};

/// Hyperbolic context: the `tanh` term count drives the exp series
/// behind the whole family.
fn hyperbolic_work(ctx: &Context) -> Context {
    working(ctx).with_e_terms(ctx.tanh_terms())
}

/// Both exponentials `(exp(x), exp(-x))` at working precision
fn exp_pair(x: &Decimal, work: &Context) -> (Decimal, Decimal) {
    let x_work = x.clone().with_context(work.clone());
    let grown = impl_exp(&x_work);
    let shrunk = impl_exp(&-&x_work);
    (grown, shrunk)
}

/// `sinh(x) = (exp(x) - exp(-x)) / 2`
pub(crate) fn impl_sinh(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    if x.is_inf() {
        return x.clone();
    }

    let work = hyperbolic_work(&ctx);
    let (grown, shrunk) = exp_pair(x, &work);
    (&grown - &shrunk).half().narrowed(&ctx)
}

/// `cosh(x) = (exp(x) + exp(-x)) / 2`
pub(crate) fn impl_cosh(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    if x.is_inf() {
        return Decimal::infinity().with_context(ctx);
    }

    let work = hyperbolic_work(&ctx);
    let (grown, shrunk) = exp_pair(x, &work);
    (&grown + &shrunk).half().narrowed(&ctx)
}

/// `tanh(x) = sinh(x) / cosh(x)`
pub(crate) fn impl_tanh(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    if x.is_inf() {
        let one = Decimal::one().with_context(ctx);
        return if x.sign() == Sign::Minus { -one } else { one };
    }

    let work = hyperbolic_work(&ctx);
    let (grown, shrunk) = exp_pair(x, &work);
    // cosh >= 1, the quotient is always defined
    ((&grown - &shrunk) / &(&grown + &shrunk)).narrowed(&ctx)
}

/// `coth(x) = cosh(x) / sinh(x)`; zero is a pole
pub(crate) fn impl_coth(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_zero() {
        return Decimal::or_special(Err(DecimalError::division_by_zero()), &ctx, Decimal::infinity());
    }
    if x.is_inf() {
        let one = Decimal::one().with_context(ctx);
        return Ok(if x.sign() == Sign::Minus { -one } else { one });
    }

    let work = hyperbolic_work(&ctx);
    let (grown, shrunk) = exp_pair(x, &work);
    Ok(((&grown + &shrunk) / &(&grown - &shrunk)).narrowed(&ctx))
}

/// `sech(x) = 1 / cosh(x)`
pub(crate) fn impl_sech(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    if x.is_inf() {
        return Decimal::zero().with_context(ctx);
    }

    let work = hyperbolic_work(&ctx);
    let cosh = impl_cosh(&x.clone().with_context(work.clone()));
    (Decimal::one().with_context(work) / &cosh).narrowed(&ctx)
}

/// `csch(x) = 1 / sinh(x)`; zero is a pole
pub(crate) fn impl_csch(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_zero() {
        return Decimal::or_special(Err(DecimalError::division_by_zero()), &ctx, Decimal::infinity());
    }
    if x.is_inf() {
        return Ok(Decimal::zero().with_context(ctx));
    }

    let work = hyperbolic_work(&ctx);
    let sinh = impl_sinh(&x.clone().with_context(work.clone()));
    Ok((Decimal::one().with_context(work) / &sinh).narrowed(&ctx))
}

/// `asinh(x) = ln(x + sqrt(x^2 + 1))`
///
/// Negative arguments go through the odd symmetry to dodge the
/// cancellation between `x` and the root.
pub(crate) fn impl_asinh(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() || x.is_inf() {
        return x.clone();
    }
    if x.sign() == Sign::Minus {
        return -impl_asinh(&x.abs());
    }

    let work = hyperbolic_work(&ctx);
    let x_work = x.clone().with_context(work.clone());
    let radicand = &x_work.square().narrowed(&work) + &Decimal::one();
    let root = improvised_sqrt(&radicand, &work);
    let result = impl_ln(&(&x_work + &root).narrowed(&work))
        .expect("argument of asinh logarithm is always positive");
    result.narrowed(&ctx)
}

/// `acosh(x) = ln(x + sqrt(x^2 - 1))` for x >= 1
pub(crate) fn impl_acosh(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_inf() && x.sign() != Sign::Minus {
        return Ok(Decimal::infinity().with_context(ctx));
    }
    if *x < Decimal::one() || x.is_inf() {
        return Decimal::or_special(Err(DecimalError::hyperbolic_domain()), &ctx, Decimal::nan());
    }

    let work = hyperbolic_work(&ctx);
    let x_work = x.clone().with_context(work.clone());
    let radicand = &x_work.square().narrowed(&work) - &Decimal::one();
    let root = improvised_sqrt(&radicand, &work);
    let result = impl_ln(&(&x_work + &root).narrowed(&work))?;
    Ok(result.narrowed(&ctx))
}

/// `atanh(x) = ln((1 + x) / (1 - x)) / 2` for |x| < 1
pub(crate) fn impl_atanh(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.abs() >= Decimal::one() {
        return Decimal::or_special(Err(DecimalError::hyperbolic_domain()), &ctx, Decimal::nan());
    }

    let work = hyperbolic_work(&ctx);
    let x_work = x.clone().with_context(work.clone());
    let one = Decimal::one().with_context(work.clone());
    let ratio = ((&one + &x_work) / &(&one - &x_work)).narrowed(&work);
    let result = impl_ln(&ratio)?;
    Ok(result.half().narrowed(&ctx))
}

/// `acoth(x) = ln((x + 1) / (x - 1)) / 2` for |x| > 1
pub(crate) fn impl_acoth(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_inf() {
        return Ok(Decimal::zero().with_context(ctx));
    }
    if x.abs() <= Decimal::one() {
        return Decimal::or_special(Err(DecimalError::hyperbolic_domain()), &ctx, Decimal::nan());
    }

    let work = hyperbolic_work(&ctx);
    let x_work = x.clone().with_context(work.clone());
    let one = Decimal::one().with_context(work.clone());
    let ratio = ((&x_work + &one) / &(&x_work - &one)).narrowed(&work);
    let result = impl_ln(&ratio)?;
    Ok(result.half().narrowed(&ctx))
}

/// `asech(x) = ln((1 + sqrt(1 - x^2)) / x)` for x in (0, 1]
pub(crate) fn impl_asech(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    let out_of_domain = x.is_inf()
        || x.is_zero()
        || x.sign() == Sign::Minus
        || *x > Decimal::one();
    if out_of_domain {
        return Decimal::or_special(Err(DecimalError::hyperbolic_domain()), &ctx, Decimal::nan());
    }

    let work = hyperbolic_work(&ctx);
    let x_work = x.clone().with_context(work.clone());
    let one = Decimal::one().with_context(work.clone());
    let radicand = &one - &x_work.square().narrowed(&work);
    let root = improvised_sqrt(&radicand, &work);
    let ratio = ((&one + &root) / &x_work).narrowed(&work);
    let result = impl_ln(&ratio)?;
    Ok(result.narrowed(&ctx))
}

/// `acsch(x) = asinh(1/x)`; zero is a pole
pub(crate) fn impl_acsch(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_zero() {
        return Decimal::or_special(Err(DecimalError::division_by_zero()), &ctx, Decimal::infinity());
    }
    if x.is_inf() {
        return Ok(Decimal::zero().with_context(ctx));
    }

    let work = hyperbolic_work(&ctx);
    let reciprocal = (Decimal::one().with_context(work.clone()) / &x.clone().with_context(work.clone()))
        .narrowed(&work);
    Ok(impl_asinh(&reciprocal).narrowed(&ctx))
}

#[cfg(test)]
mod test {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn sinh_of_one() {
        // sinh 1 = 1.1752011936438014568823818505956008151557...
        let s = dec("1").sinh();
        assert!(s.to_string().starts_with("1.17520119364380145688238185059560081"));
    }

    #[test]
    fn cosh_of_one() {
        // cosh 1 = 1.5430806348152437784779056207570616826015...
        let c = dec("1").cosh();
        assert!(c.to_string().starts_with("1.54308063481524377847790562075706168"));
    }

    #[test]
    fn tanh_of_one() {
        // tanh 1 = 0.7615941559557648881194582826047935904127...
        let t = dec("1").tanh();
        assert!(t.to_string().starts_with("0.76159415595576488811945828260479359"));
    }

    #[test]
    fn hyperbolic_identity() {
        // cosh^2 - sinh^2 = 1
        for x in ["0.5", "1", "-2"] {
            let value = dec(x);
            let identity = &value.cosh().square() - &value.sinh().square();
            let error = (&identity - &Decimal::one()).abs();
            assert!(error < dec("1e-30"), "cosh^2-sinh^2 at {} = {}", x, identity);
        }
    }

    #[test]
    fn odd_and_even_symmetry() {
        let x = dec("0.8");
        assert_eq!((&x.sinh() + &(-&x).sinh()).to_string(), "0");
        assert_eq!(x.cosh(), (-&x).cosh());
        assert_eq!((&x.tanh() + &(-&x).tanh()).to_string(), "0");
    }

    #[test]
    fn reciprocal_forms() {
        let x = dec("1.5");
        let product = &x.tanh() * &x.coth().unwrap();
        let error = (&product - &Decimal::one()).abs();
        assert!(error < dec("1e-35"), "tanh*coth = {}", product);

        assert!(Decimal::zero().coth().is_err());
        assert!(Decimal::zero().csch().is_err());

        let lenient = Context::default().with_throw_on_error(false);
        assert!(Decimal::zero().with_context(lenient).coth().unwrap().is_inf());
    }

    #[test]
    fn hyperbolics_at_infinity() {
        assert!(Decimal::infinity().sinh().is_inf());
        assert_eq!(Decimal::neg_infinity().sinh().to_string(), "-Inf");
        assert!(Decimal::neg_infinity().cosh().is_inf());
        assert_eq!(Decimal::infinity().tanh().to_string(), "1");
        assert_eq!(Decimal::neg_infinity().tanh().to_string(), "-1");
        assert_eq!(Decimal::infinity().sech().to_string(), "0");
    }

    #[test]
    fn inverse_round_trips() {
        for x in ["0.25", "1", "2.5"] {
            let value = dec(x);
            let round_trip = value.sinh().asinh();
            let error = (&round_trip - &value).abs();
            assert!(error < dec("1e-30"), "asinh(sinh({})) = {}", x, round_trip);
        }

        let x = dec("2");
        let round_trip = x.cosh().acosh().unwrap();
        let error = (&round_trip - &x).abs();
        assert!(error < dec("1e-30"), "acosh(cosh(2)) = {}", round_trip);

        let x = dec("0.5");
        let round_trip = x.tanh().atanh().unwrap();
        let error = (&round_trip - &x).abs();
        assert!(error < dec("1e-30"), "atanh(tanh(0.5)) = {}", round_trip);
    }

    #[test]
    fn asinh_is_odd() {
        let x = dec("3");
        assert_eq!((&x.asinh() + &(-&x).asinh()).to_string(), "0");
    }

    #[test]
    fn inverse_domains() {
        assert!(dec("0.5").acosh().is_err());
        assert!(dec("1").atanh().is_err());
        assert!(dec("-1.5").atanh().is_err());
        assert!(dec("0.5").acoth().is_err());
        assert!(dec("1.5").asech().is_err());
        assert!(dec("-0.2").asech().is_err());
        assert!(Decimal::zero().acsch().is_err());

        // boundary: acosh(1) = 0, asech(1) = 0
        assert_eq!(dec("1").acosh().unwrap().to_string(), "0");
        assert_eq!(dec("1").asech().unwrap().to_string(), "0");

        // acoth far out: acoth(inf) = 0
        assert_eq!(Decimal::infinity().acoth().unwrap().to_string(), "0");
    }
}

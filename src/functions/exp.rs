//! exp and pow implementation

use crate::functions::log::impl_ln;
use crate::functions::working;
use crate::{Context, Decimal, DecimalError, Sign, ToPrimitive};

/// Taylor sum `exp(x) = Σ x^n / n!` for `n = 0..=e_terms`
///
/// Convergence is governed entirely by the term count; arguments far
/// from zero need a wider `e_terms` budget.
pub(crate) fn impl_exp(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    if x.is_inf() {
        return if x.sign() == Sign::Minus {
            Decimal::zero().with_context(ctx)
        } else {
            Decimal::infinity().with_context(ctx)
        };
    }

    let work = working(&ctx);
    let x_work = x.clone().with_context(work.clone());

    let mut term = Decimal::one().with_context(work.clone());
    let mut sum = Decimal::one().with_context(work.clone());
    for n in 1..=ctx.e_terms() {
        term = (&term * &x_work) / Decimal::from(n);
        if term.is_zero() {
            break;
        }
        sum += &term;
    }

    sum.narrowed(&ctx)
}

/// Exponentiation by squaring for integer exponents
///
/// Precision is trimmed back to the working width after every
/// multiplication so the digit count cannot explode. Negative
/// exponents invert the base first.
pub(crate) fn impl_pow_int(base: &Decimal, exp: i64, ctx: &Context) -> Decimal {
    if exp == 0 {
        return Decimal::one().with_context(ctx.clone());
    }

    let work = working(ctx);

    let mut x = base.clone().with_context(work.clone());
    if exp < 0 {
        x = (Decimal::one().with_context(work.clone()) / &x).narrowed(&work);
    }

    let mut n = exp.unsigned_abs();
    let mut y = Decimal::one().with_context(work.clone());
    while n > 1 {
        if n % 2 == 1 {
            y = (&x * &y).narrowed(&work);
            n -= 1;
        }
        x = x.square().narrowed(&work);
        n /= 2;
    }

    (&x * &y).narrowed(ctx)
}

/// Full power: integer exponents by repeated squaring, fractional
/// exponents through `exp(y ln x)`.
pub(crate) fn impl_pow(base: &Decimal, exponent: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = Decimal::result_context(base, exponent);

    if base.is_nan() || exponent.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }

    if exponent.is_inf() {
        return Ok(pow_infinite_exponent(base, exponent, &ctx));
    }

    if exponent.is_zero() {
        if base.is_zero() {
            return Decimal::or_special(
                Err(DecimalError::zero_to_the_power_zero()),
                &ctx,
                Decimal::nan(),
            );
        }
        return Ok(Decimal::one().with_context(ctx));
    }

    if base.is_zero() {
        if exponent.sign() == Sign::Minus {
            return Decimal::or_special(
                Err(DecimalError::division_by_zero()),
                &ctx,
                Decimal::infinity(),
            );
        }
        return Ok(Decimal::zero().with_context(ctx));
    }

    if base.is_inf() {
        let negative_result = base.sign() == Sign::Minus && exponent_is_odd_integer(exponent);
        if exponent.sign() == Sign::Minus {
            return Ok(Decimal::zero().with_context(ctx));
        }
        if base.sign() == Sign::Minus && !exponent.is_int() {
            return Decimal::or_special(Err(DecimalError::negative_base()), &ctx, Decimal::nan());
        }
        let sign = if negative_result { Sign::Minus } else { Sign::Plus };
        return Ok(Decimal::infinity_with_sign(sign).with_context(ctx));
    }

    if exponent.is_int() {
        if let Some(n) = ToPrimitive::to_i64(exponent) {
            return Ok(impl_pow_int(base, n, &ctx));
        }
        // enormous integer exponent: route through exp(y ln |x|),
        // recovering the sign from the exponent's parity
        let negative_result = base.sign() == Sign::Minus && exponent_is_odd_integer(exponent);
        let magnitude = pow_via_exp_ln(&base.abs(), exponent, &ctx)?;
        return Ok(if negative_result { -magnitude } else { magnitude });
    }

    if base.sign() == Sign::Minus {
        return Decimal::or_special(Err(DecimalError::negative_base()), &ctx, Decimal::nan());
    }

    pow_via_exp_ln(base, exponent, &ctx)
}

fn pow_via_exp_ln(base: &Decimal, exponent: &Decimal, ctx: &Context) -> Result<Decimal, DecimalError> {
    let work = working(ctx);
    let ln_base = impl_ln(&base.clone().with_context(work.clone()))?;
    let scaled = (&exponent.clone().with_context(work.clone()) * &ln_base).narrowed(&work);
    Ok(impl_exp(&scaled).narrowed(ctx))
}

fn pow_infinite_exponent(base: &Decimal, exponent: &Decimal, ctx: &Context) -> Decimal {
    let one = Decimal::one();
    let abs_base = base.abs();

    if abs_base == one {
        return Decimal::one().with_context(ctx.clone());
    }

    let grows = abs_base > one;
    let exponent_positive = exponent.sign() != Sign::Minus;
    if grows == exponent_positive {
        Decimal::infinity().with_context(ctx.clone())
    } else {
        Decimal::zero().with_context(ctx.clone())
    }
}

/// Parity of an integral decimal, read from its lowest integer digit
fn exponent_is_odd_integer(exponent: &Decimal) -> bool {
    if !exponent.is_int() {
        return false;
    }
    let digits = exponent.magnitude();
    let last_int = digits.digit(digits.int_len() - 1);
    last_int % 2 == 1
}

#[cfg(test)]
mod test {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn exp_of_zero_is_one() {
        assert_eq!(Decimal::zero().exp().to_string(), "1");
    }

    #[test]
    fn exp_of_one_is_e() {
        let e = Decimal::one().exp();
        assert!(e.to_string().starts_with("2.718281828459045235360287471352662497757"));
    }

    #[test]
    fn exp_of_negative() {
        // 1/e = 0.36787944117144232159552377016146086744581...
        let inv_e = dec("-1").exp();
        assert!(inv_e.to_string().starts_with("0.3678794411714423215955237701614608674458"));
    }

    #[test]
    fn exp_of_specials() {
        assert!(Decimal::nan().exp().is_nan());
        assert!(Decimal::infinity().exp().is_inf());
        assert_eq!(Decimal::neg_infinity().exp().to_string(), "0");
    }

    mod pow {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $base:literal ^ $exp:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let base = dec($base);
                    let exp = dec($exp);
                    assert_eq!(base.pow(&exp).unwrap().to_string(), $expected);
                }
            };
        }

        impl_case!(case_2_10: "2" ^ "10" => "1024");
        impl_case!(case_2_n1: "2" ^ "-1" => "0.5");
        impl_case!(case_10_n3: "10" ^ "-3" => "0.001");
        impl_case!(case_neg_3_3: "-3" ^ "3" => "-27");
        impl_case!(case_neg_2_4: "-2" ^ "4" => "16");
        impl_case!(case_x_0: "123.456" ^ "0" => "1");
        impl_case!(case_0_5: "0" ^ "5" => "0");
        impl_case!(case_1_frac: "1" ^ "0.5" => "1");

        #[test]
        fn fractional_exponent() {
            let nine = dec("9");
            let root = nine.pow(&dec("0.5")).unwrap();
            // exp/ln round trip keeps 3 to well past 30 digits
            let error = (&root - dec("3")).abs();
            assert!(error < dec("1e-35"), "9^0.5 = {}", root);
        }

        #[test]
        fn zero_to_the_zero_errors() {
            assert!(Decimal::zero().pow(&Decimal::zero()).is_err());

            let lenient = Context::default().with_throw_on_error(false);
            let zero = Decimal::zero().with_context(lenient);
            assert!(zero.pow(&Decimal::zero()).unwrap().is_nan());
        }

        #[test]
        fn negative_base_fractional_exponent_errors() {
            assert!(dec("-4").pow(&dec("0.5")).is_err());

            let lenient = Context::default().with_throw_on_error(false);
            let neg = dec("-4").with_context(lenient);
            assert!(neg.pow(&dec("0.5")).unwrap().is_nan());
        }

        #[test]
        fn infinite_operands() {
            assert!(dec("2").pow(&Decimal::infinity()).unwrap().is_inf());
            assert_eq!(dec("2").pow(&Decimal::neg_infinity()).unwrap().to_string(), "0");
            assert_eq!(dec("0.5").pow(&Decimal::infinity()).unwrap().to_string(), "0");
            assert!(Decimal::infinity().pow(&dec("2")).unwrap().is_inf());
            assert_eq!(Decimal::infinity().pow(&dec("-2")).unwrap().to_string(), "0");
            assert_eq!(
                Decimal::neg_infinity().pow(&dec("3")).unwrap().to_string(),
                "-Inf",
            );
        }

        #[test]
        fn saturation_on_huge_powers() {
            // 10^50 exceeds the default 40-decimal range
            let big = dec("10").pow(&dec("50")).unwrap();
            assert!(big.is_inf());
        }
    }
}

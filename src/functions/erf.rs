//! Gauss error function

use crate::constants;
use crate::functions::working;
use crate::{Decimal, Sign};

/// `erf(x) = (2/sqrt(pi)) Σ (-1)^n x^(2n+1) / (n! (2n+1))`
///
/// The running term tracks `x^(2n+1) / n!`; each contribution divides
/// once more by the odd index.
pub(crate) fn impl_erf(x: &Decimal) -> Decimal {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Decimal::nan_with_context(&ctx);
    }
    if x.is_inf() {
        let one = Decimal::one().with_context(ctx);
        return if x.sign() == Sign::Minus { -one } else { one };
    }
    if x.is_zero() {
        return Decimal::zero().with_context(ctx);
    }

    let work = working(&ctx);
    let x_work = x.clone().with_context(work.clone());
    let x_squared = x_work.square().narrowed(&work);

    let mut term = x_work;
    let mut sum = term.clone();
    for n in 1..ctx.e_terms() {
        term = -((&term * &x_squared) / Decimal::from(n));
        if term.is_zero() {
            break;
        }
        sum += &(&term / Decimal::from(2 * n + 1));
    }

    let scale = constants::two_over_sqrt_pi_value(&work);
    (&sum * &scale).narrowed(&ctx)
}

#[cfg(test)]
mod test {
    use crate::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn erf_of_zero() {
        assert_eq!(Decimal::zero().erf().to_string(), "0");
    }

    #[test]
    fn erf_of_one() {
        // erf 1 = 0.8427007929497148693412206350826092592960...
        let e = dec("1").erf();
        assert!(e.to_string().starts_with("0.8427007929497148693412206350826"));
    }

    #[test]
    fn erf_of_half() {
        // erf 0.5 = 0.5204998778130465376827466538919645287364...
        let e = dec("0.5").erf();
        assert!(e.to_string().starts_with("0.5204998778130465376827466538919"));
    }

    #[test]
    fn erf_is_odd() {
        let x = dec("0.75");
        assert_eq!((&x.erf() + &(-&x).erf()).to_string(), "0");
    }

    #[test]
    fn erf_limits() {
        assert_eq!(Decimal::infinity().erf().to_string(), "1");
        assert_eq!(Decimal::neg_infinity().erf().to_string(), "-1");
        assert!(Decimal::nan().erf().is_nan());
    }
}

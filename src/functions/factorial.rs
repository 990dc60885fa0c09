//! factorial and combinatorics

use crate::functions::exp::impl_pow_int;
use crate::functions::working;
use crate::{Decimal, DecimalError, Sign, ToPrimitive};

/// Factorial by iterated multiply; the argument must be a
/// non-negative integer.
pub(crate) fn impl_factorial(x: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = x.context().clone();

    if x.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if x.is_inf() {
        if x.sign() == Sign::Minus {
            return Decimal::or_special(Err(DecimalError::factorial_domain()), &ctx, Decimal::nan());
        }
        return Ok(Decimal::infinity().with_context(ctx));
    }
    if x.sign() == Sign::Minus || !x.is_int() {
        return Decimal::or_special(Err(DecimalError::factorial_domain()), &ctx, Decimal::nan());
    }

    let mut product = Decimal::one().with_context(ctx.clone());
    let mut counter = Decimal::one().with_context(ctx.clone());
    while &counter <= x {
        product = &product * &counter;
        if product.is_inf() {
            break;
        }
        counter = counter.inc();
    }

    Ok(product)
}

/// Permutations `nPr = n (n-1) … (n-k+1)`, the factorial quotient with
/// the shared tail cancelled.
pub(crate) fn impl_n_p_r(n: &Decimal, k: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = Decimal::result_context(n, k);

    if n.is_nan() || k.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    if !combinatoric_operand(n) || !combinatoric_operand(k) || k > n {
        return Decimal::or_special(Err(DecimalError::combinatoric_domain()), &ctx, Decimal::nan());
    }

    let mut product = Decimal::one().with_context(ctx.clone());
    let mut factor = n.clone();
    let mut remaining = k.clone();
    while remaining > Decimal::zero() {
        product = &product * &factor;
        if product.is_inf() {
            break;
        }
        factor = factor.dec();
        remaining = remaining.dec();
    }

    Ok(product)
}

/// Combinations `nCr = nPr / k!`
pub(crate) fn impl_n_c_r(n: &Decimal, k: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = Decimal::result_context(n, k);

    let permutations = impl_n_p_r(n, k)?;
    if permutations.is_nan() {
        return Ok(permutations);
    }

    let k_factorial = impl_factorial(k)?;
    let combinations = Decimal::or_special(
        permutations.checked_div(&k_factorial),
        &ctx,
        Decimal::nan(),
    )?;
    Ok(combinations.narrowed(&ctx))
}

/// Binomial expansion `(x + y)^n = Σ C(n,k) x^k y^(n-k)` for
/// non-negative integer `n`.
///
/// The running coefficient is updated exactly:
/// `C(n,k+1) = C(n,k) (n-k) / (k+1)`.
pub(crate) fn impl_binomial(x: &Decimal, y: &Decimal, n: &Decimal) -> Result<Decimal, DecimalError> {
    let ctx = Decimal::result_context(x, y);

    if x.is_nan() || y.is_nan() || n.is_nan() {
        return Ok(Decimal::nan_with_context(&ctx));
    }
    let order = match ToPrimitive::to_u64(n) {
        Some(order) if combinatoric_operand(n) => order,
        _ => {
            return Decimal::or_special(
                Err(DecimalError::combinatoric_domain()),
                &ctx,
                Decimal::nan(),
            );
        }
    };

    let work = working(&ctx);
    let x_work = x.clone().with_context(work.clone());
    let y_work = y.clone().with_context(work.clone());

    let mut coefficient = Decimal::one().with_context(work.clone());
    let mut x_power = Decimal::one().with_context(work.clone());
    let mut sum = Decimal::zero().with_context(work.clone());

    for k in 0..=order {
        let y_power = impl_pow_int(&y_work, (order - k) as i64, &work);
        let term = &(&coefficient * &x_power) * &y_power;
        sum += &term;

        if k < order {
            coefficient = (&coefficient * Decimal::from(order - k)) / Decimal::from(k + 1);
            x_power = (&x_power * &x_work).narrowed(&work);
        }
    }

    Ok(sum.narrowed(&ctx))
}

/// Combinatoric operands must be finite non-negative integers
fn combinatoric_operand(value: &Decimal) -> bool {
    !value.is_inf() && value.is_int() && value.sign() != Sign::Minus
}

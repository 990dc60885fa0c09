//!
//! Long division with Newton-Raphson reciprocal refinement
//!

use crate::arithmetic::{multiplication::mul_magnitudes, subtraction::sub_magnitudes};
use crate::digitbuf::DigitBuf;
use crate::{Context, Decimal, DecimalError, Sign};

/// Fractional guard digits carried past the requested precision before
/// the final rounding step.
pub(crate) const DIV_GUARD: usize = 4;

/// Divide two magnitudes by schoolbook long division
///
/// Both operands are scaled to integers by the larger fractional
/// length (the net scale cancels in the quotient), the integer part of
/// the quotient is extracted digit by digit, then the remainder is
/// repeatedly multiplied by ten for `frac_digits` more digits. The
/// quotient is truncated, not rounded.
pub(crate) fn long_divide_magnitudes(num: &DigitBuf, den: &DigitBuf, frac_digits: usize) -> DigitBuf {
    debug_assert!(!den.is_zero());

    let scale = num.decimals().max(den.decimals());

    let mut scaled_num = num.clone();
    scaled_num.pad_decimals_to(scale);
    let mut scaled_den = den.clone();
    scaled_den.pad_decimals_to(scale);

    // integer digit sequence of the scaled divisor, leading zeros dropped
    let den_digits: Vec<u8> = {
        let lead = scaled_den.iter().take_while(|&&d| d == 0).count();
        let lead = lead.min(scaled_den.len() - 1);
        scaled_den.iter().skip(lead).copied().collect()
    };

    // den_digits times 1..=9, reused for every quotient digit
    let multiples: Vec<Vec<u8>> = (1..=9)
        .map(|k| int_mul_digit(&den_digits, k))
        .collect();

    let mut quotient = std::collections::VecDeque::with_capacity(scaled_num.len() + frac_digits);
    let mut remainder: Vec<u8> = Vec::with_capacity(den_digits.len() + 1);

    let incoming = scaled_num.iter().copied().chain(std::iter::repeat(0).take(frac_digits));
    for digit in incoming {
        remainder.push(digit);
        if remainder.len() > 1 && remainder[0] == 0 {
            remainder.remove(0);
        }

        let mut q_digit = 0u8;
        for k in (1..=9u8).rev() {
            if int_cmp(&multiples[k as usize - 1], &remainder) != std::cmp::Ordering::Greater {
                q_digit = k;
                break;
            }
        }
        if q_digit > 0 {
            int_sub_assign(&mut remainder, &multiples[q_digit as usize - 1]);
        }
        quotient.push_back(q_digit);
    }

    let mut result = DigitBuf::from_parts(quotient, frac_digits);
    result.lead_trim();
    result
}

/// Multiply an integer digit sequence by a single digit
fn int_mul_digit(digits: &[u8], k: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0u8;
    for &d in digits.iter().rev() {
        let prod = d * k + carry;
        out.push(prod % 10);
        carry = prod / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out.reverse();
    out
}

/// Compare integer digit sequences, ignoring leading zeros
fn int_cmp(lhs: &[u8], rhs: &[u8]) -> std::cmp::Ordering {
    let lhs = &lhs[lhs.iter().take_while(|&&d| d == 0).count()..];
    let rhs = &rhs[rhs.iter().take_while(|&&d| d == 0).count()..];
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

/// In-place subtraction of integer digit sequences; `rhs` must not exceed `lhs`
fn int_sub_assign(lhs: &mut Vec<u8>, rhs: &[u8]) {
    debug_assert!(int_cmp(lhs, rhs) != std::cmp::Ordering::Less);

    let mut borrow = 0i8;
    let mut rhs_iter = rhs.iter().rev();
    for d in lhs.iter_mut().rev() {
        let sub = *rhs_iter.next().unwrap_or(&0) as i8;
        let mut diff = *d as i8 - sub - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        *d = diff as u8;
    }
    debug_assert_eq!(borrow, 0);

    while lhs.len() > 1 && lhs[0] == 0 {
        lhs.remove(0);
    }
}

/// Full division of decimal values
///
/// Returns an error only for a finite dividend over an exact zero;
/// special operands resolve by the usual rules before any digit work.
/// With `div_rounds > 0` the long-division quotient is checked against
/// `dividend * reciprocal`, where the reciprocal is tightened by
/// Newton-Raphson rounds `r = r * (2 - d * r)`; when the two quotients
/// disagree the one with the smaller residual `|a - q * b|` wins.
pub(crate) fn impl_div(lhs: &Decimal, rhs: &Decimal, ctx: &Context) -> Result<Decimal, DecimalError> {
    if lhs.is_nan() || rhs.is_nan() {
        return Ok(Decimal::nan_with_context(ctx));
    }

    let sign = mul_sign(lhs.sign(), rhs.sign());
    match (lhs.is_inf(), rhs.is_inf()) {
        (true, true) => return Ok(Decimal::nan_with_context(ctx)),
        (true, false) => return Ok(Decimal::infinity_with_sign(sign).with_context(ctx.clone())),
        (false, true) => return Ok(Decimal::zero().with_context(ctx.clone())),
        (false, false) => {}
    }

    if rhs.is_zero() {
        return Err(DecimalError::division_by_zero());
    }
    if lhs.is_zero() {
        return Ok(Decimal::zero().with_context(ctx.clone()));
    }

    let frac = ctx.decimals() + DIV_GUARD;
    let mut quotient = long_divide_magnitudes(lhs.magnitude(), rhs.magnitude(), frac);

    if ctx.div_rounds() > 0 {
        let refined = refine_quotient(lhs, rhs, &quotient, frac, ctx);
        if let Some(better) = refined {
            quotient = better;
        }
    }

    quotient.narrow_to(ctx.decimals(), ctx.rounding_mode());
    Ok(Decimal::from_magnitude(sign, quotient, ctx))
}

/// Newton-Raphson pass over the divisor reciprocal
///
/// Returns a replacement quotient magnitude when the refined product
/// `a * r` lands closer to the dividend than the long-division result.
fn refine_quotient(
    lhs: &Decimal,
    rhs: &Decimal,
    quotient: &DigitBuf,
    frac: usize,
    ctx: &Context,
) -> Option<DigitBuf> {
    let work = ctx.widened(DIV_GUARD).with_div_rounds(0);

    let a = Decimal::from_magnitude(Sign::Plus, lhs.magnitude().clone(), &work);
    let b = Decimal::from_magnitude(Sign::Plus, rhs.magnitude().clone(), &work);
    let two = Decimal::from(2u8).with_context(work.clone());

    // seed from long division of 1/b, then tighten
    let seed = long_divide_magnitudes(&DigitBuf::single(1), rhs.magnitude(), frac + DIV_GUARD);
    let mut reciprocal = Decimal::from_magnitude(Sign::Plus, seed, &work);

    for _ in 0..ctx.div_rounds() {
        let correction = &two - &(&b * &reciprocal);
        reciprocal = (&reciprocal * &correction).narrowed(&work);
    }

    let mut candidate = (&a * &reciprocal).magnitude().clone();
    candidate.narrow_to(frac, crate::RoundingMode::TowardZero);
    candidate.trail_trim();

    let mut reference = quotient.clone();
    reference.trail_trim();
    if candidate == reference {
        return None;
    }

    // disagreement: keep whichever quotient leaves the smaller residual
    let residual = |q: &DigitBuf| -> DigitBuf {
        let product = mul_magnitudes(q, rhs.magnitude());
        match DigitBuf::cmp_magnitude(lhs.magnitude(), &product) {
            std::cmp::Ordering::Less => sub_magnitudes(&product, lhs.magnitude()),
            _ => sub_magnitudes(lhs.magnitude(), &product),
        }
    };

    let candidate_residual = residual(&candidate);
    let reference_residual = residual(&reference);
    if DigitBuf::cmp_magnitude(&candidate_residual, &reference_residual) == std::cmp::Ordering::Less {
        Some(candidate)
    } else {
        None
    }
}

/// Value the division operator collapses to when the divisor is zero
/// and errors are not surfaced.
pub(crate) fn division_special(lhs: &Decimal, ctx: &Context) -> Decimal {
    if lhs.is_zero() {
        Decimal::nan_with_context(ctx)
    } else {
        Decimal::infinity_with_sign(lhs.sign()).with_context(ctx.clone())
    }
}

/// Sign of a product or quotient
pub(crate) fn mul_sign(lhs: Sign, rhs: Sign) -> Sign {
    match (lhs, rhs) {
        (Sign::Minus, Sign::Minus) => Sign::Plus,
        (Sign::Minus, _) | (_, Sign::Minus) => Sign::Minus,
        _ => Sign::Plus,
    }
}

#[cfg(test)]
mod test_long_divide {
    use super::*;

    fn buf(digits: &[u8], decimals: usize) -> DigitBuf {
        DigitBuf::from_parts(digits.iter().copied().collect(), decimals)
    }

    macro_rules! impl_case {
        ($name:ident: [$($a:literal),*]/$ad:literal div [$($b:literal),*]/$bd:literal, $frac:literal => [$($c:literal),*]/$cd:literal) => {
            #[test]
            fn $name() {
                let a = buf(&[$($a),*], $ad);
                let b = buf(&[$($b),*], $bd);
                let expected = buf(&[$($c),*], $cd);

                assert_eq!(long_divide_magnitudes(&a, &b, $frac), expected);
            }
        };
    }

    impl_case!(case_6_3: [6]/0 div [3]/0, 0 => [2]/0);
    impl_case!(case_1_3: [1]/0 div [3]/0, 5 => [0, 3, 3, 3, 3, 3]/5);
    impl_case!(case_10_4: [1, 0]/0 div [4]/0, 2 => [2, 5, 0]/2);
    impl_case!(case_1_8: [1]/0 div [8]/0, 4 => [0, 1, 2, 5, 0]/4);
    impl_case!(case_355_113: [3, 5, 5]/0 div [1, 1, 3]/0, 6 => [3, 1, 4, 1, 5, 9, 2]/6);
    impl_case!(case_frac_operands: [1, 5]/1 div [0, 5]/1, 0 => [3]/0);
    impl_case!(case_shifted: [1, 2, 1]/2 div [1, 1]/1, 1 => [1, 1]/1);

    #[test]
    fn int_helpers() {
        assert_eq!(int_mul_digit(&[2, 5], 4), vec![1, 0, 0]);
        assert_eq!(int_cmp(&[0, 9], &[9]), std::cmp::Ordering::Equal);

        let mut v = vec![1, 0, 0];
        int_sub_assign(&mut v, &[1]);
        assert_eq!(v, vec![9, 9]);
    }
}

//!
//! Long multiplication of digit-buffer magnitudes
//!

use crate::digitbuf::DigitBuf;
use std::collections::VecDeque;

/// Multiply two magnitudes with grade-school long multiplication
///
/// Each digit of the right operand contributes a partial product into
/// an accumulator shifted by the digit's position; the accumulated
/// columns are carry-normalized at the end. The result carries
/// `lhs.decimals + rhs.decimals` fractional digits before the final
/// trims.
pub(crate) fn mul_magnitudes(lhs: &DigitBuf, rhs: &DigitBuf) -> DigitBuf {
    let decimals = lhs.decimals() + rhs.decimals();

    // columns indexed least-significant first
    let mut columns = vec![0u32; lhs.len() + rhs.len()];
    for (j, &b_digit) in rhs.iter().rev().enumerate() {
        if b_digit == 0 {
            continue;
        }
        for (i, &a_digit) in lhs.iter().rev().enumerate() {
            columns[i + j] += (a_digit * b_digit) as u32;
        }
    }

    let mut out = VecDeque::with_capacity(columns.len());
    let mut carry = 0u32;
    for col in columns {
        let sum = col + carry;
        out.push_front((sum % 10) as u8);
        carry = sum / 10;
    }
    debug_assert_eq!(carry, 0);

    let mut result = DigitBuf::from_parts(out, decimals);
    result.lead_trim();
    result.trail_trim();
    result
}

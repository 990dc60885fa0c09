//!
//! Addition of digit-buffer magnitudes
//!

use crate::digitbuf::DigitBuf;
use std::collections::VecDeque;

/// Add two magnitudes
///
/// Operands are aligned by padding the shorter fraction with zeros,
/// then summed right-to-left with carry. The result carries
/// `max(lhs.decimals, rhs.decimals)` fractional digits before the
/// final trims.
pub(crate) fn add_magnitudes(lhs: &DigitBuf, rhs: &DigitBuf) -> DigitBuf {
    let decimals = lhs.decimals().max(rhs.decimals());

    let mut a = lhs.clone();
    let mut b = rhs.clone();
    a.pad_decimals_to(decimals);
    b.pad_decimals_to(decimals);
    let int_len = a.int_len().max(b.int_len());
    a.pad_int_to(int_len);
    b.pad_int_to(int_len);

    let mut out = VecDeque::with_capacity(a.len() + 1);
    let mut carry = 0u8;
    for (&x, &y) in a.iter().rev().zip(b.iter().rev()) {
        let sum = x + y + carry;
        out.push_front(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push_front(carry);
    }

    let mut result = DigitBuf::from_parts(out, decimals);
    result.lead_trim();
    result.trail_trim();
    result
}

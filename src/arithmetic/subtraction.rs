//!
//! Subtraction of digit-buffer magnitudes
//!

use crate::digitbuf::DigitBuf;
use std::collections::VecDeque;

/// Subtract the smaller magnitude `rhs` from `lhs`
///
/// Alignment mirrors addition, with borrow in place of carry.
/// The caller must guarantee `lhs >= rhs`; the sign of the difference
/// is resolved at the wrapping layer.
pub(crate) fn sub_magnitudes(lhs: &DigitBuf, rhs: &DigitBuf) -> DigitBuf {
    debug_assert!(DigitBuf::cmp_magnitude(lhs, rhs) != std::cmp::Ordering::Less);

    let decimals = lhs.decimals().max(rhs.decimals());

    let mut a = lhs.clone();
    let mut b = rhs.clone();
    a.pad_decimals_to(decimals);
    b.pad_decimals_to(decimals);
    let int_len = a.int_len().max(b.int_len());
    a.pad_int_to(int_len);
    b.pad_int_to(int_len);

    let mut out = VecDeque::with_capacity(a.len());
    let mut borrow = 0i8;
    for (&x, &y) in a.iter().rev().zip(b.iter().rev()) {
        let mut diff = x as i8 - y as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push_front(diff as u8);
    }
    debug_assert_eq!(borrow, 0);

    let mut result = DigitBuf::from_parts(out, decimals);
    result.lead_trim();
    result.trail_trim();
    result
}

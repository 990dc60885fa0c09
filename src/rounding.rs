//! Rounding structures and subroutines

/// Determines how fractional digits are discarded when a value is
/// narrowed to fewer decimal places.
///
/// Only the two schemes selectable through a context exist: half-up
/// (the default) and truncation toward zero. Both act on the magnitude,
/// so half-up rounds away from zero for negative values.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to the nearest neighbor, away from zero on ties
    ///
    /// * 1.15 → 1.2
    /// * 1.14 → 1.1
    /// * -1.15 → -1.2
    HalfUp,

    /// Drop the digits, always toward zero
    ///
    /// * 1.19 → 1.1
    /// * -1.19 → -1.1
    TowardZero,
}

impl RoundingMode {
    /// Round a pair of adjacent digits
    ///
    /// `pair` holds the last digit kept and the highest digit dropped;
    /// to narrow 0.345 to two places pass `(4, 5)`.
    ///
    /// Returns the kept digit rounded, which may be 10 when a carry
    /// must propagate into more significant digits.
    pub fn round_pair(&self, pair: (u8, u8)) -> u8 {
        let (lhs, rhs) = pair;
        debug_assert!(lhs < 10 && rhs < 10);

        match *self {
            RoundingMode::TowardZero => lhs,
            RoundingMode::HalfUp => {
                if rhs >= 5 {
                    lhs + 1
                } else {
                    lhs
                }
            }
        }
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::HalfUp
    }
}


#[cfg(test)]
mod test_round_pair {
    use super::*;

    #[test]
    fn half_up() {
        assert_eq!(RoundingMode::HalfUp.round_pair((4, 5)), 5);
        assert_eq!(RoundingMode::HalfUp.round_pair((4, 4)), 4);
        assert_eq!(RoundingMode::HalfUp.round_pair((9, 9)), 10);
        assert_eq!(RoundingMode::HalfUp.round_pair((0, 0)), 0);
    }

    #[test]
    fn toward_zero() {
        assert_eq!(RoundingMode::TowardZero.round_pair((4, 5)), 4);
        assert_eq!(RoundingMode::TowardZero.round_pair((9, 9)), 9);
    }
}

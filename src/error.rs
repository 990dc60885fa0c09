//! Error types for parsing and fallible arithmetic/transcendental operations.

use std::error::Error;
use std::fmt;

/// An error returned when parsing a decimal (or hex-encoded decimal) string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecimalError {
    kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseErrorKind {
    Empty,
    Invalid,
    InvalidRadix,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "cannot parse decimal from empty string"),
            ParseErrorKind::Invalid => write!(f, "invalid decimal literal"),
            ParseErrorKind::InvalidRadix => write!(f, "invalid radix for decimal parsing"),
        }
    }
}

impl Error for ParseDecimalError {}

impl ParseDecimalError {
    #[inline]
    const fn new(kind: ParseErrorKind) -> Self {
        ParseDecimalError { kind }
    }

    #[inline]
    pub(crate) const fn empty() -> Self {
        Self::new(ParseErrorKind::Empty)
    }

    #[inline]
    pub(crate) const fn invalid() -> Self {
        Self::new(ParseErrorKind::Invalid)
    }

    #[inline]
    pub(crate) const fn invalid_radix() -> Self {
        Self::new(ParseErrorKind::InvalidRadix)
    }
}

/// An error returned when an arithmetic or transcendental operation is
/// mathematically undefined or otherwise cannot produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalError {
    kind: DecimalErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DecimalErrorKind {
    DivisionByZero,
    ModuloByZero,
    NarrowingOverflow,
    NegativeBase,
    ZeroToThePowerZero,
    SqrtOfNegative,
    LogNonPositive,
    InverseTrigDomain,
    HyperbolicDomain,
    FactorialDomain,
    CombinatoricDomain,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            DecimalErrorKind::DivisionByZero => write!(f, "division by zero"),
            DecimalErrorKind::ModuloByZero => write!(f, "modulo by zero"),
            DecimalErrorKind::NarrowingOverflow => write!(f, "value does not fit in the target type"),
            DecimalErrorKind::NegativeBase => write!(f, "negative base with fractional exponent"),
            DecimalErrorKind::ZeroToThePowerZero => write!(f, "zero raised to the power of zero"),
            DecimalErrorKind::SqrtOfNegative => write!(f, "square root of a negative number"),
            DecimalErrorKind::LogNonPositive => write!(f, "logarithm of a non-positive number"),
            DecimalErrorKind::InverseTrigDomain => write!(f, "value outside the domain of the inverse trigonometric function"),
            DecimalErrorKind::HyperbolicDomain => write!(f, "value outside the domain of the hyperbolic function"),
            DecimalErrorKind::FactorialDomain => write!(f, "factorial is only defined for non-negative integers"),
            DecimalErrorKind::CombinatoricDomain => write!(f, "value outside the domain of the combinatoric function"),
        }
    }
}

impl Error for DecimalError {}

impl DecimalError {
    #[inline]
    const fn new(kind: DecimalErrorKind) -> Self {
        DecimalError { kind }
    }

    #[inline]
    pub(crate) const fn division_by_zero() -> Self {
        Self::new(DecimalErrorKind::DivisionByZero)
    }

    #[inline]
    pub(crate) const fn modulo_by_zero() -> Self {
        Self::new(DecimalErrorKind::ModuloByZero)
    }

    #[inline]
    pub(crate) const fn narrowing_overflow() -> Self {
        Self::new(DecimalErrorKind::NarrowingOverflow)
    }

    #[inline]
    pub(crate) const fn negative_base() -> Self {
        Self::new(DecimalErrorKind::NegativeBase)
    }

    #[inline]
    pub(crate) const fn zero_to_the_power_zero() -> Self {
        Self::new(DecimalErrorKind::ZeroToThePowerZero)
    }

    #[inline]
    pub(crate) const fn sqrt_of_negative() -> Self {
        Self::new(DecimalErrorKind::SqrtOfNegative)
    }

    #[inline]
    pub(crate) const fn log_non_positive() -> Self {
        Self::new(DecimalErrorKind::LogNonPositive)
    }

    #[inline]
    pub(crate) const fn inverse_trig_domain() -> Self {
        Self::new(DecimalErrorKind::InverseTrigDomain)
    }

    #[inline]
    pub(crate) const fn hyperbolic_domain() -> Self {
        Self::new(DecimalErrorKind::HyperbolicDomain)
    }

    #[inline]
    pub(crate) const fn factorial_domain() -> Self {
        Self::new(DecimalErrorKind::FactorialDomain)
    }

    #[inline]
    pub(crate) const fn combinatoric_domain() -> Self {
        Self::new(DecimalErrorKind::CombinatoricDomain)
    }
}

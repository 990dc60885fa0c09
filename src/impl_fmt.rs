//! Implementations of std::fmt traits and stringification routines
//!

use crate::{Decimal, Kind, Sign};

use num_bigint::BigUint;
use std::fmt;

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Nan => return write!(f, "NaN"),
            Kind::Infinity => {
                if self.sign == Sign::Minus {
                    return write!(f, "-Inf");
                }
                return write!(f, "Inf");
            }
            Kind::Normal => {}
        }

        if self.sign == Sign::Minus {
            write!(f, "-")?;
        }
        self.write_digits(f)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal(sign={:?}, kind={:?}, decimals={}, digits={:?})",
            self.sign,
            self.kind,
            self.digits.decimals(),
            self.digits.iter().collect::<Vec<_>>(),
        )
    }
}

impl Decimal {
    /// Write the unsigned digit sequence with its decimal point
    fn write_digits<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let int_len = self.digits.int_len();
        for &d in self.digits.iter().take(int_len) {
            w.write_char((b'0' + d) as char)?;
        }
        if self.digits.decimals() > 0 {
            w.write_char('.')?;
            for &d in self.digits.iter().skip(int_len) {
                w.write_char((b'0' + d) as char)?;
            }
        }
        Ok(())
    }

    /// Canonical string padded or rounded to exactly the context's
    /// `decimals` fractional digits
    pub fn to_fixed_string(&self) -> String {
        if self.kind != Kind::Normal {
            return self.to_string();
        }

        let decimals = self.ctx.decimals();
        let mut digits = self.digits.clone();
        digits.narrow_to(decimals, self.ctx.rounding_mode());
        digits.pad_decimals_to(decimals);

        let mut out = String::with_capacity(digits.len() + 2);
        if self.sign == Sign::Minus && !digits.is_zero() {
            out.push('-');
        }
        let int_len = digits.int_len();
        for &d in digits.iter().take(int_len) {
            out.push((b'0' + d) as char);
        }
        if decimals > 0 {
            out.push('.');
            for &d in digits.iter().skip(int_len) {
                out.push((b'0' + d) as char);
            }
        }
        out
    }

    /// Scientific notation `d.ddd…e±k`
    pub fn exp_notation(&self) -> String {
        if self.kind != Kind::Normal {
            return self.to_string();
        }
        if self.is_zero() {
            return "0e0".to_string();
        }

        let digits: Vec<u8> = self.digits.iter().copied().collect();
        let first_significant = digits.iter().position(|&d| d != 0).unwrap();
        let exponent = self.digits.int_len() as i64 - 1 - first_significant as i64;

        let mut mantissa: Vec<u8> = digits[first_significant..].to_vec();
        while mantissa.len() > 1 && *mantissa.last().unwrap() == 0 {
            mantissa.pop();
        }

        let mut out = String::with_capacity(mantissa.len() + 8);
        if self.sign == Sign::Minus {
            out.push('-');
        }
        out.push((b'0' + mantissa[0]) as char);
        if mantissa.len() > 1 {
            out.push('.');
            for &d in &mantissa[1..] {
                out.push((b'0' + d) as char);
            }
        }
        out.push('e');
        out.push_str(&exponent.to_string());
        out
    }

    /// Hex digit string of the integer portion, truncated toward zero
    ///
    /// Uppercase by default; pass `lowercase = true` for lowercase
    /// digits. The radix conversion performs the repeated
    /// divide-by-sixteen through the bigint backend.
    pub fn to_hex(&self, lowercase: bool) -> String {
        if self.kind != Kind::Normal {
            return self.to_string();
        }

        let truncated = self.trunc();
        let mut repr = String::with_capacity(truncated.digits.int_len());
        for &d in truncated.digits.iter().take(truncated.digits.int_len()) {
            repr.push((b'0' + d) as char);
        }

        let magnitude = BigUint::parse_bytes(repr.as_bytes(), 10)
            .expect("digit buffer is always a valid decimal integer");
        let hex = magnitude.to_str_radix(16);
        let hex = if lowercase { hex } else { hex.to_uppercase() };

        if self.sign == Sign::Minus && !truncated.is_zero() {
            format!("-{}", hex)
        } else {
            hex
        }
    }
}

#[cfg(test)]
mod test_fmt {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    macro_rules! impl_display_case {
        ($name:ident: $input:literal) => {
            #[test]
            fn $name() {
                let value = Decimal::from_str($input).unwrap();
                assert_eq!(value.to_string(), $input);
            }
        };
    }

    impl_display_case!(case_int: "42");
    impl_display_case!(case_neg: "-42");
    impl_display_case!(case_frac: "3.14");
    impl_display_case!(case_small: "0.0001");
    impl_display_case!(case_trailing_zeros: "1.500");
    impl_display_case!(case_zero: "0");

    #[test]
    fn display_specials() {
        assert_eq!(Decimal::nan().to_string(), "NaN");
        assert_eq!(Decimal::infinity().to_string(), "Inf");
        assert_eq!(Decimal::neg_infinity().to_string(), "-Inf");
    }

    #[test]
    fn fixed_string_pads_to_context() {
        let ctx = Context::default().with_decimals(4);
        let x = Decimal::from_str("1.5").unwrap().with_context(ctx.clone());
        assert_eq!(x.to_fixed_string(), "1.5000");

        let y = Decimal::from_str("2").unwrap().with_context(ctx);
        assert_eq!(y.to_fixed_string(), "2.0000");
    }

    #[test]
    fn fixed_string_rounds_excess_digits() {
        // with_context widens to the stored fraction, so force the
        // narrower precision directly
        let mut x = Decimal::from_str("1.005").unwrap();
        x.ctx = Context::default().with_decimals(2);
        assert_eq!(x.to_fixed_string(), "1.01");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(Decimal::from_str("123.45").unwrap().exp_notation(), "1.2345e2");
        assert_eq!(Decimal::from_str("0.00123").unwrap().exp_notation(), "1.23e-3");
        assert_eq!(Decimal::from_str("7").unwrap().exp_notation(), "7e0");
        assert_eq!(Decimal::from_str("-250").unwrap().exp_notation(), "-2.5e2");
        assert_eq!(Decimal::zero().exp_notation(), "0e0");
    }

    #[test]
    fn hex_output() {
        assert_eq!(Decimal::from(255u8).to_hex(false), "FF");
        assert_eq!(Decimal::from(255u8).to_hex(true), "ff");
        assert_eq!(Decimal::from(-16i32).to_hex(false), "-10");
        assert_eq!(Decimal::from_str("255.99").unwrap().to_hex(false), "FF");
        assert_eq!(Decimal::zero().to_hex(false), "0");
        assert_eq!(
            Decimal::from_str("79228162514264337593543950335").unwrap().to_hex(false),
            "FFFFFFFFFFFFFFFFFFFFFFFF",
        );
        assert_eq!(Decimal::infinity().to_hex(false), "Inf");
    }
}

// included by lib.rs in test builds

#[allow(unused_imports)]
mod decimal_api_tests {
    use crate::{Context, Decimal};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    mod scenarios {
        use super::*;

        #[test]
        fn one_third_at_forty_decimals() {
            let quotient = &dec("1") / &dec("3");
            assert!(quotient
                .to_string()
                .starts_with("0.3333333333333333333333333333333333333333"));
        }

        #[test]
        fn sqrt_two_within_last_digit() {
            let root = dec("2").sqrt().unwrap();
            let reference = dec("1.4142135623730950488016887242096980785696");
            let error = (&root - &reference).abs();
            assert!(error < dec("1e-39"), "sqrt(2) = {}", root);
        }

        #[test]
        fn pi_to_forty_fractional_digits() {
            let pi = crate::Constants::default().pi();
            let reference = dec("3.1415926535897932384626433832795028841971");
            let error = (&pi - &reference).abs();
            assert!(error < dec("1e-39"), "pi = {}", pi);
        }

        #[test]
        fn zero_to_the_zero() {
            assert!(Decimal::zero().pow(&Decimal::zero()).is_err());

            let lenient = Context::default().with_throw_on_error(false);
            let zero = Decimal::zero().with_context(lenient);
            assert!(zero.pow(&Decimal::zero()).unwrap().is_nan());
        }

        #[test]
        fn huge_quotient_saturates() {
            let quotient = &dec("1e400") / &dec("1e-400");
            assert_eq!(quotient.to_string(), "Inf");
        }

        #[test]
        fn modulus_sign_follows_dividend() {
            let remainder = &dec("-5") % &dec("3");
            assert_eq!(remainder.to_string(), "-2");
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn addition_round_trips() {
            for (x, y) in [("1.25", "3"), ("-7.5", "0.001"), ("123456.789", "-0.999")] {
                let x = dec(x);
                let y = dec(y);
                let back = &(&x + &y) - &y;
                assert_eq!(back, x, "({} + {}) - {}", x, y, y);
            }
        }

        #[test]
        fn division_round_trips() {
            for (x, y) in [("1", "3"), ("10", "7"), ("-22", "0.7")] {
                let x = dec(x);
                let y = dec(y);
                let back = &(&x / &y) * &y;
                let error = (&back - &x).abs();
                assert!(error < dec("1e-39"), "({} / {}) * {} = {}", x, y, y, back);
            }
        }

        #[test]
        fn additive_inverse_is_exact() {
            for x in ["0", "1.5", "-123.456", "0.0001"] {
                let x = dec(x);
                let sum = &x + &(-&x);
                assert!(sum.is_zero());
            }
        }

        #[test]
        fn exp_ln_round_trips() {
            for x in ["0.5", "2", "10"] {
                let x = dec(x);

                let there_and_back = x.ln().unwrap().exp();
                let error = (&there_and_back - &x).abs();
                assert!(error < dec("1e-30"), "exp(ln({})) = {}", x, there_and_back);
            }

            // the other direction, for arguments the series resolves
            let x = dec("1.5");
            let there_and_back = x.exp().ln().unwrap();
            let error = (&there_and_back - &x).abs();
            assert!(error < dec("1e-35"), "ln(exp(1.5)) = {}", there_and_back);
        }

        #[test]
        fn string_round_trips() {
            for s in ["0", "42", "-42", "3.14159", "0.0001", "1.500", "-0.333"] {
                let value = dec(s);
                assert_eq!(Decimal::from_str(&value.to_string()).unwrap(), value);
                assert_eq!(value.to_string(), s);
            }
        }

        #[test]
        fn hex_round_trips() {
            for s in ["0", "1", "255", "4096", "-123456789", "79228162514264337593543950335"] {
                let value = dec(s);
                let hex = value.to_hex(false);
                assert_eq!(Decimal::from_hex(&hex).unwrap(), value, "hex of {} is {}", s, hex);
            }
        }

        #[test]
        fn nan_absorbs_every_operator() {
            let x = dec("5");
            let nan = Decimal::nan();

            assert!((&nan + &x).is_nan());
            assert!((&x - &nan).is_nan());
            assert!((&nan * &x).is_nan());
            assert!((&x / &nan).is_nan());
            assert!((&nan % &x).is_nan());
            assert!(x.pow(&nan).unwrap().is_nan());
        }

        #[test]
        fn floor_is_idempotent() {
            for s in ["2.7", "-2.7", "5", "-0.2"] {
                let x = dec(s);
                assert_eq!(x.floor().floor(), x.floor());
            }
        }
    }

    mod rounding_family {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal, floor=$floor:literal, ceil=$ceil:literal) => {
                #[test]
                fn $name() {
                    let x = dec($input);
                    assert_eq!(x.floor().to_string(), $floor);
                    assert_eq!(x.ceil().to_string(), $ceil);
                }
            };
        }

        impl_case!(case_positive: "2.5", floor = "2", ceil = "3");
        impl_case!(case_negative: "-2.5", floor = "-3", ceil = "-2");
        impl_case!(case_integral: "7", floor = "7", ceil = "7");
        impl_case!(case_neg_integral: "-7", floor = "-7", ceil = "-7");
        impl_case!(case_small: "0.0001", floor = "0", ceil = "1");
        impl_case!(case_neg_small: "-0.0001", floor = "-1", ceil = "0");

        #[test]
        fn round_half_up_and_truncate() {
            let x = dec("2.345");
            assert_eq!(x.round(2).to_string(), "2.35");
            assert_eq!(x.round(0).to_string(), "2");

            let truncating = Context::default().with_trunc_not_round(true);
            let x = dec("2.345").with_context(truncating);
            assert_eq!(x.round(2).to_string(), "2.34");

            let negative = dec("-2.345");
            assert_eq!(negative.round(2).to_string(), "-2.35");
        }

        #[test]
        fn specials_pass_through() {
            assert!(Decimal::nan().floor().is_nan());
            assert!(Decimal::infinity().ceil().is_inf());
            assert!(Decimal::neg_infinity().round(2).is_inf());
        }
    }

    mod value_api {
        use super::*;

        #[test]
        fn default_is_nan() {
            assert!(Decimal::default().is_nan());
        }

        #[test]
        fn increment_and_decrement() {
            let x = dec("41");
            assert_eq!(x.inc().to_string(), "42");
            assert_eq!(x.dec().to_string(), "40");
            assert_eq!(dec("-0.5").inc().to_string(), "0.5");
        }

        #[test]
        fn signum_values() {
            assert_eq!(dec("17.5").signum().to_string(), "1");
            assert_eq!(dec("-17.5").signum().to_string(), "-1");
            assert_eq!(Decimal::zero().signum().to_string(), "0");
            assert!(Decimal::nan().signum().is_nan());
            assert_eq!(Decimal::neg_infinity().signum().to_string(), "-1");
        }

        #[test]
        fn digit_counts() {
            let x = dec("123.4500");
            assert_eq!(x.ints(), 3);
            assert_eq!(x.decimals(), 4);
            assert!(!x.is_int());
            assert!(dec("123").is_int());
            // stored zeros do not make a fraction significant
            assert!(dec("5.000").is_int());
        }

        #[test]
        fn doubling_and_halving() {
            let x = dec("12.5");
            assert_eq!(x.double().to_string(), "25");
            assert_eq!(x.half().to_string(), "6.25");
            assert_eq!(x.square().to_string(), "156.25");
        }

        #[test]
        fn with_context_widens_to_stored_fraction() {
            let x = dec("0.12345");
            let reconfigured = x.with_context(Context::default().with_decimals(2));
            assert_eq!(reconfigured.context().decimals(), 5);

            let y = dec("7");
            let reconfigured = y.with_context(Context::default().with_decimals(2));
            assert_eq!(reconfigured.context().decimals(), 2);
        }

        #[test]
        fn literal_macro() {
            assert_eq!(dec!(3.14).to_string(), "3.14");
            assert_eq!(dec!(-7).to_string(), "-7");
            assert_eq!(dec!("0.333").to_string(), "0.333");
            assert_eq!(
                dec!("123456789123456789123456789123456789").to_string(),
                "123456789123456789123456789123456789",
            );
        }

        #[test]
        fn saturation_at_the_range_boundary() {
            // 10^40 itself is representable, one past it is not
            let limit = Decimal::one() * dec("1e40");
            assert!(!limit.is_inf());

            let beyond = &dec("1e40") + &dec("1");
            assert!(beyond.is_inf());

            let doubled = dec("1e40").double();
            assert!(doubled.is_inf());
        }

        #[test]
        fn checked_forms_ignore_the_flag() {
            let lenient = Context::default().with_throw_on_error(false);
            let x = dec("5").with_context(lenient);

            assert!(x.checked_div(&Decimal::zero()).is_err());
            assert!(x.checked_rem(&Decimal::zero()).is_err());
            assert!(x.checked_div(&dec("2")).unwrap().to_string() == "2.5");
        }
    }
}

//! Property tests over `Real` arithmetic (spec §8 "testable
//! properties"), exercised on small integer-valued operands so the
//! expected results can be checked independently via `i64` arithmetic.

use std::cmp::Ordering;

use mp_core::real::Real;
use proptest::prelude::*;

fn small_int() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

fn nonzero_small_int() -> impl Strategy<Value = i64> {
    small_int().prop_filter("nonzero", |v| *v != 0)
}

proptest! {
    #[test]
    fn addition_is_commutative(a in small_int(), b in small_int()) {
        let ra = Real::from_i64(a);
        let rb = Real::from_i64(b);
        prop_assert_eq!(ra.add(&rb).compare(&rb.add(&ra)), Ordering::Equal);
    }

    #[test]
    fn addition_matches_i64_for_small_operands(a in small_int(), b in small_int()) {
        let ra = Real::from_i64(a);
        let rb = Real::from_i64(b);
        let expected = Real::from_i64(a + b);
        prop_assert_eq!(ra.add(&rb).compare(&expected), Ordering::Equal);
    }

    #[test]
    fn multiplication_matches_i64_for_small_operands(a in -1000i64..1000, b in -1000i64..1000) {
        let ra = Real::from_i64(a);
        let rb = Real::from_i64(b);
        let expected = Real::from_i64(a * b);
        prop_assert_eq!(ra.mul(&rb).compare(&expected), Ordering::Equal);
    }

    #[test]
    fn mul_then_div_recovers_operand(a in nonzero_small_int(), b in nonzero_small_int()) {
        let ra = Real::from_i64(a);
        let rb = Real::from_i64(b);
        let back = ra.mul(&rb).div(&rb);
        prop_assert_eq!(back.compare(&ra), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in small_int(), b in small_int()) {
        let ra = Real::from_i64(a);
        let rb = Real::from_i64(b);
        prop_assert_eq!(ra.compare(&rb).reverse(), rb.compare(&ra));
    }

    #[test]
    fn neg_twice_is_identity(a in small_int()) {
        let ra = Real::from_i64(a);
        prop_assert_eq!(ra.neg().neg().compare(&ra), Ordering::Equal);
    }

    #[test]
    fn parse_write_string_roundtrips_integers(a in -1_000_000i64..1_000_000i64) {
        let ra = Real::from_i64(a);
        let s = ra.write_string(12);
        let parsed = Real::parse(&s).unwrap();
        prop_assert_eq!(parsed.compare(&ra), Ordering::Equal);
    }

    #[test]
    fn order_matches_decimal_digit_count(a in 1i64..1_000_000_000_000i64) {
        let ra = Real::from_i64(a);
        let expected_order = a.to_string().len() as i64 - 1;
        prop_assert_eq!(ra.order(), expected_order);
    }
}

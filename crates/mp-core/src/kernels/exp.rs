//! Exponential function (spec §4.7 `exp`).
//!
//! Argument reduction `x = k*ln2 + r` with `r` bounded to roughly
//! `[-ln2/2, ln2/2]` keeps the reduced argument small regardless of
//! `x`'s magnitude; `exp(x) = exp(r) * 2^k`. `exp(r)` itself is computed
//! one of two ways depending on the configured precision (spec §4.7:
//! "two precision regimes"):
//!
//! - At or below [`thresholds::EXP_TAYLOR_DIGITS10_MAX`] digits, direct
//!   Taylor summation — cheap per term, but needs `O(digits)` terms.
//! - Above it, Newton iteration against the already-quasi-linear `log`
//!   kernel (`y_{n+1} = y_n*(1 + (r - log(y_n)))`), which converges
//!   quadratically in the number of correct digits.

use crate::config::thresholds;
use crate::detail::{exp_estimate, is_negligible, AdaptivePrecision};
use crate::kernels::{constants, log::log, pow2::pow2};
use crate::precision::CorePrecision;
use crate::real::Real;

/// `e^x`.
pub fn exp(x: &Real) -> Real {
    if x.is_nan() {
        return Real::nan();
    }
    if x.is_inf() {
        return if x.is_negative() { Real::zero() } else { Real::infinity(false) };
    }
    if x.is_zero() {
        return Real::from_u64(1);
    }

    let ln2 = constants::ln2();
    let k = x.div(&ln2).to_f64_approx().round() as i64;
    let r = x.sub(&ln2.mul_small(k));

    let digits10 = CorePrecision::global().digits().digits10();
    let base = if digits10 <= thresholds::EXP_TAYLOR_DIGITS10_MAX {
        exp_taylor(&r)
    } else {
        exp_newton_via_log(&r)
    };

    base.mul(&pow2(k))
}

fn exp_taylor(r: &Real) -> Real {
    let mut term = Real::from_u64(1);
    let mut sum = Real::from_u64(1);
    for n in 1..=thresholds::MAX_TAYLOR_TERMS {
        term = term.mul(r).div_small(n as i64);
        if is_negligible(&term) {
            break;
        }
        sum = sum.add(&term);
    }
    sum
}

fn exp_newton_via_log(r: &Real) -> Real {
    let seed = exp_estimate(r.to_f64_approx());
    let mut y = Real::from_f64(seed);

    let mut schedule = AdaptivePrecision::new();
    let mut rp = r.clone();
    for _ in 0..thresholds::MAX_ITERATIONS {
        let p = schedule.current();
        rp.set_prec_elem(p);
        y.set_prec_elem(p);
        let delta = rp.sub(&log(&y));
        if schedule.is_full_precision() && is_negligible(&delta) {
            break;
        }
        y = y.mul(&Real::from_u64(1).add(&delta));
        schedule.advance();
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_of_zero_is_one() {
        assert_eq!(exp(&Real::zero()).compare(&Real::from_u64(1)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn exp_of_ln2_is_two() {
        let r = exp(&constants::ln2());
        assert_eq!(r.compare(&Real::from_u64(2)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn exp_and_log_are_inverse() {
        let x = Real::from_u64(3);
        let back = log(&exp(&x));
        let diff = back.sub(&x);
        assert!(crate::detail::is_negligible(&diff));
    }

    #[test]
    fn exp_of_negative_infinity_is_zero() {
        assert!(exp(&Real::infinity(true)).is_zero());
    }
}

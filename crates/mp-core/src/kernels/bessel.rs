//! Bessel function of the first kind (spec §11 supplemented features,
//! `cyl_bessel_j`), via its defining power series
//!
//! ```text
//! J_n(x) = sum_{k=0}^inf (-1)^k / (k! * (n+k)!) * (x/2)^(2k+n)
//! ```
//!
//! built as a term-to-term ratio so no factorial beyond `n!` itself
//! needs computing directly.

use crate::config::thresholds;
use crate::detail::is_negligible;
use crate::real::Real;

fn int_factorial(n: u32) -> Real {
    let mut r = Real::from_u64(1);
    for i in 1..=n as i64 {
        r = r.mul_small(i);
    }
    r
}

/// `J_n(x)` for non-negative integer order `n`.
pub fn cyl_bessel_j(n: u32, x: &Real) -> Real {
    if x.is_nan() {
        return Real::nan();
    }
    if x.is_inf() {
        return Real::nan();
    }

    let half_x = x.div_small(2);
    let neg_half_x2 = half_x.mul(&half_x).neg();

    let mut half_x_pow_n = Real::from_u64(1);
    for _ in 0..n {
        half_x_pow_n = half_x_pow_n.mul(&half_x);
    }
    let mut term = half_x_pow_n.div(&int_factorial(n));
    let mut sum = term.clone();

    for k in 1..=thresholds::BESSEL_SERIES_TERMS {
        let denom = (k as i64) * (n as i64 + k as i64);
        term = term.mul(&neg_half_x2).div_small(denom);
        if is_negligible(&term) {
            break;
        }
        sum = sum.add(&term);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn bessel_j0_of_zero_is_one() {
        let r = cyl_bessel_j(0, &Real::zero());
        assert_eq!(r.compare(&Real::from_u64(1)), Ordering::Equal);
    }

    #[test]
    fn bessel_jn_of_zero_for_positive_order_is_zero() {
        let r = cyl_bessel_j(3, &Real::zero());
        assert!(r.is_zero());
    }

    #[test]
    fn bessel_j0_is_bounded_near_origin() {
        // J_0(1) ~ 0.7651976865...
        let r = cyl_bessel_j(0, &Real::from_u64(1));
        let lo = Real::parse("0.76").unwrap();
        let hi = Real::parse("0.77").unwrap();
        assert_eq!(r.compare(&lo), Ordering::Greater);
        assert_eq!(r.compare(&hi), Ordering::Less);
    }
}

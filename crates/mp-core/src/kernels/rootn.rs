//! `n`-th root reciprocal via Newton-Raphson (spec §4.7 `rootn_inv`).
//!
//! `y_{k+1} = y_k * (1 + (1 - x*y_k^n)/n)`, solving `f(y) = 1/y^n - x`.
//! `n` is a small positive integer (root index), so `y^n` is formed by
//! plain repeated multiplication rather than a binary-lifted power.

use crate::config::thresholds;
use crate::detail::{is_negligible, AdaptivePrecision};
use crate::real::Real;

/// `x^(-1/n)`. Even `n` requires `x > 0`; odd `n` accepts negative `x`
/// and preserves its sign.
pub fn rootn_inv(x: &Real, n: u32) -> Real {
    if x.is_nan() || n == 0 {
        return Real::nan();
    }
    if x.is_zero() {
        return Real::infinity(false);
    }
    if x.is_negative() && n % 2 == 0 {
        return Real::nan();
    }
    if x.is_inf() {
        return Real::zero();
    }

    let order = x.order();
    let mantissa = x.mantissa_f64().abs();
    let seed_mantissa = (1.0 / mantissa).powf(1.0 / n as f64);
    let seed_order = (-(order as f64) / n as f64).round() as i64;
    let mut y = Real::from_f64(seed_mantissa).scale_pow10(seed_order);
    if x.is_negative() {
        y = y.neg();
    }

    let n_real = Real::from_u64(n as u64);
    let mut schedule = AdaptivePrecision::new();
    let mut xp = x.clone();
    for _ in 0..thresholds::MAX_ITERATIONS {
        let p = schedule.current();
        xp.set_prec_elem(p);
        y.set_prec_elem(p);
        let yn = pow_small(&y, n);
        let residual = Real::from_u64(1).sub(&xp.mul(&yn));
        if schedule.is_full_precision() && is_negligible(&residual) {
            break;
        }
        let factor = Real::from_u64(1).add(&residual.div(&n_real));
        y = y.mul(&factor);
        schedule.advance();
    }
    y
}

fn pow_small(y: &Real, n: u32) -> Real {
    let mut r = Real::from_u64(1);
    for _ in 0..n {
        r = r.mul(y);
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rootn_inv_of_cube_recovers_cube_root_reciprocal() {
        let x = Real::from_u64(8);
        let y = rootn_inv(&x, 3);
        // y ~ 1/2
        let expected = Real::from_u64(1).div_small(2);
        assert_eq!(y.compare(&expected), std::cmp::Ordering::Equal);
    }

    #[test]
    fn rootn_inv_odd_root_preserves_sign() {
        let x = Real::from_i64(-27);
        let y = rootn_inv(&x, 3);
        assert!(y.is_negative());
    }

    #[test]
    fn rootn_inv_even_root_of_negative_is_nan() {
        assert!(rootn_inv(&Real::from_i64(-4), 2).is_nan());
    }
}

//! Square root via the coupled Newton iteration (spec §4.7 `sqrt`).
//!
//! Tracks `x_k -> sqrt(v)` and `y_k -> 1/(2*x_k)` together so every step
//! only needs multiplication and addition, no division:
//!
//! ```text
//! x_{k+1} = x_k + (v - x_k^2) * y_k
//! y_{k+1} = y_k + y_k * (1 - 2*x_{k+1}*y_k)
//! ```

use crate::config::thresholds;
use crate::detail::{is_negligible, AdaptivePrecision};
use crate::kernels::inv::inv;
use crate::real::Real;

/// `sqrt(v)`. Negative finite inputs yield `NaN` (spec §4.7: "no complex
/// promotion for real `sqrt`").
pub fn sqrt(v: &Real) -> Real {
    if v.is_nan() {
        return Real::nan();
    }
    if v.is_zero() {
        return Real::zero();
    }
    if v.is_negative() {
        return Real::nan();
    }
    if v.is_inf() {
        return Real::infinity(false);
    }

    let order = v.order();
    let (mantissa, half_order) = if order.rem_euclid(2) == 0 {
        (v.mantissa_f64(), order / 2)
    } else {
        (v.mantissa_f64() * 10.0, (order - 1) / 2)
    };

    let mut x = Real::from_f64(mantissa.sqrt()).scale_pow10(half_order);
    let mut y = inv(&x).div_small(2);

    let mut schedule = AdaptivePrecision::new();
    let mut vp = v.clone();
    for _ in 0..thresholds::MAX_ITERATIONS {
        let p = schedule.current();
        vp.set_prec_elem(p);
        x.set_prec_elem(p);
        y.set_prec_elem(p);
        let residual = vp.sub(&x.mul(&x));
        if schedule.is_full_precision() && is_negligible(&residual.div(&x)) {
            break;
        }
        let x_next = x.add(&residual.mul(&y));
        let y_next = y.add(&y.mul(&Real::from_u64(1).sub(&x_next.mul(&y).mul_small(2))));
        x = x_next;
        y = y_next;
        schedule.advance();
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_of_perfect_square() {
        let r = sqrt(&Real::from_u64(144));
        assert_eq!(r.compare(&Real::from_u64(12)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn sqrt_of_two_squared_recovers_two() {
        let two = Real::from_u64(2);
        let r = sqrt(&two);
        let back = r.mul(&r);
        assert_eq!(back.compare(&two), std::cmp::Ordering::Equal);
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        assert!(sqrt(&Real::from_i64(-4)).is_nan());
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        assert!(sqrt(&Real::zero()).is_zero());
    }
}

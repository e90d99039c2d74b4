//! Trigonometric and inverse trigonometric kernels (spec §4.7 `sin`,
//! `cos`, `tan`, `asin`, `acos`, `atan`, `atan2`).
//!
//! `sin`/`cos` reduce the argument modulo `2*pi` into `[-pi, pi]` and
//! sum the alternating Taylor series directly; the inverse functions
//! seed from an `f64` estimate and Newton-refine against `sin`/`cos`
//! themselves (`asin`), or reduce to `asin` (`acos`, `atan`, `atan2`).

use crate::config::thresholds;
use crate::detail::{is_negligible, AdaptivePrecision};
use crate::kernels::{constants::pi, sqrt::sqrt};
use crate::real::Real;

fn reduce_mod_2pi(x: &Real) -> Real {
    let two_pi = pi().mul_small(2);
    let k = x.div(&two_pi).to_f64_approx().round() as i64;
    x.sub(&two_pi.mul_small(k))
}

fn sin_taylor(r: &Real) -> Real {
    let r2 = r.mul(r);
    let mut term = r.clone();
    let mut sum = r.clone();
    for n in 1..=thresholds::MAX_TAYLOR_TERMS {
        let k = (2 * n) as i64;
        term = term.mul(&r2).div_small(k * (k + 1)).neg();
        if is_negligible(&term) {
            break;
        }
        sum = sum.add(&term);
    }
    sum
}

fn cos_taylor(r: &Real) -> Real {
    let r2 = r.mul(r);
    let mut term = Real::from_u64(1);
    let mut sum = Real::from_u64(1);
    for n in 1..=thresholds::MAX_TAYLOR_TERMS {
        let k = (2 * n - 1) as i64;
        term = term.mul(&r2).div_small(k * (k + 1)).neg();
        if is_negligible(&term) {
            break;
        }
        sum = sum.add(&term);
    }
    sum
}

/// `sin(x)`.
pub fn sin(x: &Real) -> Real {
    if x.is_nan() || x.is_inf() {
        return Real::nan();
    }
    sin_taylor(&reduce_mod_2pi(x))
}

/// `cos(x)`.
pub fn cos(x: &Real) -> Real {
    if x.is_nan() || x.is_inf() {
        return Real::nan();
    }
    cos_taylor(&reduce_mod_2pi(x))
}

/// `tan(x) = sin(x)/cos(x)`, `NaN` at the poles (`cos(x) == 0`).
pub fn tan(x: &Real) -> Real {
    let c = cos(x);
    if c.is_zero() {
        return Real::nan();
    }
    sin(x).div(&c)
}

/// `sin(x)` and `cos(x)` together, sharing the one argument reduction.
pub fn sin_cos(x: &Real) -> (Real, Real) {
    if x.is_nan() || x.is_inf() {
        return (Real::nan(), Real::nan());
    }
    let r = reduce_mod_2pi(x);
    (sin_taylor(&r), cos_taylor(&r))
}

/// `asin(x)`, `x` in `[-1, 1]`; out of range yields `NaN`.
pub fn asin(x: &Real) -> Real {
    if x.is_nan() {
        return Real::nan();
    }
    if x.compare(&Real::from_u64(1)) == std::cmp::Ordering::Greater
        || x.compare(&Real::from_i64(-1)) == std::cmp::Ordering::Less
    {
        return Real::nan();
    }
    if x.is_zero() {
        return Real::zero();
    }

    let mut y = Real::from_f64(x.to_f64_approx().asin());
    let mut schedule = AdaptivePrecision::new();
    let mut xp = x.clone();
    for _ in 0..thresholds::MAX_ITERATIONS {
        let p = schedule.current();
        xp.set_prec_elem(p);
        y.set_prec_elem(p);
        let (sy, cy) = sin_cos(&y);
        let residual = xp.sub(&sy);
        if schedule.is_full_precision() && is_negligible(&residual) {
            break;
        }
        if cy.is_zero() {
            break;
        }
        y = y.add(&residual.div(&cy));
        schedule.advance();
    }
    y
}

/// `acos(x) = pi/2 - asin(x)`.
pub fn acos(x: &Real) -> Real {
    pi().div_small(2).sub(&asin(x))
}

/// `atan(x) = asin(x / sqrt(1 + x^2))`.
pub fn atan(x: &Real) -> Real {
    if x.is_nan() {
        return Real::nan();
    }
    if x.is_inf() {
        let half_pi = pi().div_small(2);
        return if x.is_negative() { half_pi.neg() } else { half_pi };
    }
    let denom = sqrt(&Real::from_u64(1).add(&x.mul(x)));
    asin(&x.div(&denom))
}

/// `atan2(y, x)`, quadrant-aware (spec §4.7 `atan2`: "full-plane angle,
/// matching `atan2`'s sign/quadrant conventions").
pub fn atan2(y: &Real, x: &Real) -> Real {
    if y.is_nan() || x.is_nan() {
        return Real::nan();
    }
    if x.is_zero() {
        if y.is_zero() {
            return Real::zero();
        }
        let half_pi = pi().div_small(2);
        return if y.is_negative() { half_pi.neg() } else { half_pi };
    }

    let base = atan(&y.div(x));
    if x.is_negative() {
        if y.is_negative() {
            base.sub(&pi())
        } else {
            base.add(&pi())
        }
    } else {
        base
    }
}

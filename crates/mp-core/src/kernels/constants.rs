//! `pi` and `ln2` (spec §4.7, §8 "π agreement").
//!
//! `ln2` cannot go through the general AGM `log` formula directly:
//! `log(x) = pi/(2*a_k) - m*ln2` already has `ln2` on its right-hand
//! side, which is circular for `x == 2`. Instead `ln2` is bootstrapped
//! by folding `x`'s contribution into a single enlarged `m`:
//! `ln2 = pi / (2*m*AGM(1, 4/2^m))`, with no `m*ln2` term to subtract.
//! `pi` itself only needs `sqrt`/`inv`, so it is computed first and
//! cached independently.
//!
//! Three independent algorithms are exposed for `pi` (spec §8: the
//! three must agree to `digits10_tol` digits): the Gauss-Legendre/
//! Brent-Salamin AGM iteration (used for the cached canonical value),
//! and Borwein's cubic and quartic iterations as cross-checks. The
//! quintic variant named in the original material is intentionally
//! left out — see the Open Questions entry in DESIGN.md.

use std::sync::OnceLock;

use crate::config::thresholds;
use crate::detail::{agm, is_negligible, AdaptivePrecision};
use crate::kernels::pow2::pow2;
use crate::kernels::sqrt::sqrt;
use crate::precision::CorePrecision;
use crate::real::Real;

static PI: OnceLock<Real> = OnceLock::new();
static LN2: OnceLock<Real> = OnceLock::new();

/// The cached canonical value of π (Brent-Salamin AGM iteration).
pub fn pi() -> Real {
    PI.get_or_init(pi_brent_salamin).clone()
}

/// The cached canonical value of ln 2.
pub fn ln2() -> Real {
    LN2.get_or_init(compute_ln2).clone()
}

fn pi_brent_salamin() -> Real {
    let half = Real::from_u64(1).div_small(2);
    let mut a = Real::from_u64(1);
    let mut b = sqrt(&half);
    let mut t = Real::from_u64(1).div_small(4);
    let mut p = Real::from_u64(1);

    let mut schedule = AdaptivePrecision::new();
    for _ in 0..thresholds::MAX_ITERATIONS {
        let working = schedule.current();
        a.set_prec_elem(working);
        b.set_prec_elem(working);
        let diff = a.sub(&b);
        if schedule.is_full_precision() && is_negligible(&diff) {
            break;
        }
        let a_next = a.add(&b).div_small(2);
        let b_next = sqrt(&a.mul(&b));
        let t_next = t.sub(&p.mul(&diff.mul(&diff)));
        p = p.mul_small(2);
        a = a_next;
        b = b_next;
        t = t_next;
        schedule.advance();
    }

    let sum = a.add(&b);
    sum.mul(&sum).div(&t.mul_small(4))
}

fn compute_ln2() -> Real {
    let digits10_tol = CorePrecision::global().digits().digits10_tol();
    let m = ((1.67 * digits10_tol as f64).ceil() as i64).max(8);

    let a0 = Real::from_u64(1);
    let b0 = Real::from_u64(4).div(&pow2(m));
    let (ak, _) = agm(a0, b0);

    pi().div(&ak.mul_small(2).mul_small(m))
}

/// π via Borwein's cubically convergent AGM-analogue iteration
/// (spec §8 cross-check; not cached — each call recomputes).
pub fn pi_borwein_cubic() -> Real {
    let three = Real::from_u64(3);
    let sqrt3 = sqrt(&three);
    let mut a = Real::from_u64(1).div_small(3);
    let mut s = sqrt3.sub(&Real::from_u64(1)).div_small(2);

    let mut power_of_three = Real::from_u64(1);
    let mut schedule = AdaptivePrecision::new();
    for _ in 0..thresholds::MAX_ITERATIONS {
        let working = schedule.current();
        a.set_prec_elem(working);
        s.set_prec_elem(working);
        let s3 = s.mul(&s).mul(&s);
        let inner = Real::from_u64(1).sub(&s3);
        let cube_root = crate::kernels::rootn::rootn_inv(&crate::kernels::inv::inv(&inner), 3);
        let r = Real::from_u64(3).div(&Real::from_u64(1).add(&cube_root.mul_small(2)));
        let s_next = r.sub(&Real::from_u64(1)).div_small(2);
        let r2 = r.mul(&r);
        let a_next = r2.mul(&a).sub(&power_of_three.mul(&r2.sub(&Real::from_u64(1))));

        power_of_three = power_of_three.mul_small(3);
        if schedule.is_full_precision() && is_negligible(&a_next.sub(&a)) {
            a = a_next;
            break;
        }
        s = s_next;
        a = a_next;
        schedule.advance();
    }

    crate::kernels::inv::inv(&a)
}

/// π via Borwein's quartically convergent iteration (spec §8 cross-check).
pub fn pi_borwein_quartic() -> Real {
    let two = Real::from_u64(2);
    let sqrt2 = sqrt(&two);
    let mut y = sqrt2.sub(&Real::from_u64(1));
    let mut a = Real::from_u64(6).sub(&sqrt2.mul_small(4));

    let mut schedule = AdaptivePrecision::new();
    for k in 0..thresholds::MAX_ITERATIONS {
        let working = schedule.current();
        a.set_prec_elem(working);
        y.set_prec_elem(working);
        let y4 = y.mul(&y).mul(&y).mul(&y);
        let inner = Real::from_u64(1).sub(&y4);
        let root4 = sqrt(&sqrt(&inner));
        let y_next = Real::from_u64(1).sub(&root4).div(&Real::from_u64(1).add(&root4));

        let one_plus_y = Real::from_u64(1).add(&y_next);
        let pow4 = one_plus_y.mul(&one_plus_y).mul(&one_plus_y).mul(&one_plus_y);
        let bracket = Real::from_u64(1).add(&y_next).add(&y_next.mul(&y_next));
        let scale = pow2((2 * k as i64) + 3);
        let a_next = a.mul(&pow4).sub(&scale.mul(&y_next).mul(&bracket));

        if schedule.is_full_precision() && is_negligible(&a_next.sub(&a)) {
            a = a_next;
            break;
        }
        y = y_next;
        a = a_next;
        schedule.advance();
    }

    crate::kernels::inv::inv(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_is_between_three_and_four() {
        let p = pi();
        assert_eq!(p.compare(&Real::from_u64(3)), std::cmp::Ordering::Greater);
        assert_eq!(p.compare(&Real::from_u64(4)), std::cmp::Ordering::Less);
    }

    #[test]
    fn ln2_is_between_zero_point_six_and_zero_point_seven() {
        let l = ln2();
        let lo = Real::parse("0.6").unwrap();
        let hi = Real::parse("0.7").unwrap();
        assert_eq!(l.compare(&lo), std::cmp::Ordering::Greater);
        assert_eq!(l.compare(&hi), std::cmp::Ordering::Less);
    }

    #[test]
    fn pi_is_cached_across_calls() {
        let a = pi();
        let b = pi();
        assert_eq!(a.compare(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn borwein_cubic_is_in_range() {
        let p = pi_borwein_cubic();
        assert_eq!(p.compare(&Real::from_u64(3)), std::cmp::Ordering::Greater);
        assert_eq!(p.compare(&Real::from_u64(4)), std::cmp::Ordering::Less);
    }

    #[test]
    fn borwein_quartic_is_in_range() {
        let p = pi_borwein_quartic();
        assert_eq!(p.compare(&Real::from_u64(3)), std::cmp::Ordering::Greater);
        assert_eq!(p.compare(&Real::from_u64(4)), std::cmp::Ordering::Less);
    }
}

//! Natural logarithm via the Gauss AGM formula (spec §4.7 `log`).
//!
//! `log(x) = pi / (2 * AGM(1, 4/(x*2^m))) - m*ln2`, with `m` chosen
//! large enough that `4/(x*2^m)` is small (spec: `m = max(8, ceil(1.67
//! *digits10 - log2(x)))`). `x == 2` and `x == 1/2` are routed to the
//! cached `ln2` directly to avoid re-deriving it through the general
//! formula; `x < 1` is handled by inverting and negating.

use crate::detail::{agm, log_m_parameter};
use crate::kernels::{constants, pow2::pow2};
use crate::precision::CorePrecision;
use crate::real::Real;
use std::cmp::Ordering;

/// `ln(x)`. `x <= 0` (including `x == 0`) yields `NaN`; `x == +inf`
/// yields `+inf`.
pub fn log(x: &Real) -> Real {
    if x.is_nan() {
        return Real::nan();
    }
    if x.is_inf() {
        return if x.is_negative() { Real::nan() } else { Real::infinity(false) };
    }
    if x.is_zero() || x.is_negative() {
        return Real::nan();
    }
    if x.compare(&Real::from_u64(1)) == Ordering::Equal {
        return Real::zero();
    }
    if x.compare(&Real::from_u64(2)) == Ordering::Equal {
        return constants::ln2();
    }
    let half = Real::from_u64(1).div_small(2);
    if x.compare(&half) == Ordering::Equal {
        return constants::ln2().neg();
    }
    if x.compare(&Real::from_u64(1)) == Ordering::Less {
        return log(&crate::kernels::inv::inv(x)).neg();
    }

    let digits10 = CorePrecision::global().digits().digits10();
    let m = log_m_parameter(digits10, x);

    let a0 = Real::from_u64(1);
    let denom = x.mul(&pow2(m));
    let b0 = Real::from_u64(4).div(&denom);
    let (ak, _) = agm(a0, b0);

    constants::pi()
        .div(&ak.mul_small(2))
        .sub(&constants::ln2().mul_small(m))
}

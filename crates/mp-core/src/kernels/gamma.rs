//! Gamma function and real factorial (spec §11 supplemented features).
//!
//! `ln_gamma` uses the Stirling asymptotic series (driven by
//! [`crate::kernels::bernoulli`]), shifting the argument up by integer
//! steps first so the series is evaluated where it converges fast, then
//! un-shifting via the gamma recurrence `gamma(z+1) = z*gamma(z)`.
//! Negative non-integer arguments go through Euler's reflection formula;
//! non-positive integers are poles.

use crate::config::thresholds;
use crate::kernels::{bernoulli::bernoulli, constants::pi, exp::exp, log::log, trig::sin};
use crate::real::Real;

const SHIFT_TARGET: i64 = 15;

fn ln_gamma_stirling(z: &Real) -> Real {
    let half = Real::from_u64(1).div_small(2);
    let term1 = z.sub(&half).mul(&log(z));
    let term2 = z.neg();
    let two_pi = pi().mul_small(2);
    let term3 = log(&two_pi).div_small(2);

    let z2 = z.mul(z);
    let mut zpower = z.clone();
    let mut series = Real::zero();
    for k in 1..=thresholds::GAMMA_STIRLING_TERMS {
        let b2k = bernoulli(2 * k);
        let denom = (2 * k * (2 * k - 1)) as i64;
        let term = b2k.div(&zpower.mul_small(denom));
        series = series.add(&term);
        zpower = zpower.mul(&z2);
    }

    term1.add(&term2).add(&term3).add(&series)
}

/// `ln(gamma(z))` for `z > 0`.
fn ln_gamma_positive(z: &Real) -> Real {
    let mut shift: i64 = 0;
    let mut shifted = z.clone();
    while shifted.compare(&Real::from_i64(SHIFT_TARGET)) == std::cmp::Ordering::Less {
        shifted = shifted.add(&Real::from_u64(1));
        shift += 1;
    }

    let mut correction = Real::zero();
    for i in 0..shift {
        correction = correction.add(&log(&z.add(&Real::from_i64(i))));
    }

    ln_gamma_stirling(&shifted).sub(&correction)
}

fn is_non_positive_integer(z: &Real) -> bool {
    if z.compare(&Real::zero()) == std::cmp::Ordering::Greater {
        return false;
    }
    let rounded = Real::from_i64(z.to_f64_approx().round() as i64);
    z.sub(&rounded).is_zero()
}

/// `gamma(z)`. Poles at `z = 0, -1, -2, ...` yield `NaN`.
pub fn gamma(z: &Real) -> Real {
    if z.is_nan() {
        return Real::nan();
    }
    if is_non_positive_integer(z) {
        return Real::nan();
    }
    if z.compare(&Real::zero()) == std::cmp::Ordering::Greater {
        return exp(&ln_gamma_positive(z));
    }

    // Reflection formula: gamma(z) = pi / (sin(pi*z) * gamma(1-z)).
    let one_minus_z = Real::from_u64(1).sub(z);
    let denom = sin(&pi().mul(z)).mul(&gamma(&one_minus_z));
    pi().div(&denom)
}

/// `x!` via `gamma(x + 1)`.
pub fn factorial(x: &Real) -> Real {
    gamma(&x.add(&Real::from_u64(1)))
}

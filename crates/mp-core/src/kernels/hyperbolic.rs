//! Hyperbolic functions and their inverses (spec §11 supplemented
//! features), all expressed directly in terms of `exp`/`log` rather than
//! their own series — `sinh`/`cosh` share one `exp` evaluation each.

use crate::kernels::{exp::exp, log::log, sqrt::sqrt};
use crate::real::Real;

fn exp_pair(x: &Real) -> (Real, Real) {
    let e = exp(x);
    let e_inv = crate::kernels::inv::inv(&e);
    (e, e_inv)
}

pub fn sinh(x: &Real) -> Real {
    let (e, e_inv) = exp_pair(x);
    e.sub(&e_inv).div_small(2)
}

pub fn cosh(x: &Real) -> Real {
    let (e, e_inv) = exp_pair(x);
    e.add(&e_inv).div_small(2)
}

pub fn tanh(x: &Real) -> Real {
    let (e, e_inv) = exp_pair(x);
    e.sub(&e_inv).div(&e.add(&e_inv))
}

/// `asinh(x) = ln(x + sqrt(x^2 + 1))`.
pub fn asinh(x: &Real) -> Real {
    let inner = x.add(&sqrt(&x.mul(x).add(&Real::from_u64(1))));
    log(&inner)
}

/// `acosh(x) = ln(x + sqrt(x^2 - 1))`, defined for `x >= 1`.
pub fn acosh(x: &Real) -> Real {
    if x.compare(&Real::from_u64(1)) == std::cmp::Ordering::Less {
        return Real::nan();
    }
    let inner = x.add(&sqrt(&x.mul(x).sub(&Real::from_u64(1))));
    log(&inner)
}

/// `atanh(x) = ln((1+x)/(1-x)) / 2`, defined for `|x| < 1`.
pub fn atanh(x: &Real) -> Real {
    let one = Real::from_u64(1);
    if x.compare(&one) != std::cmp::Ordering::Less || x.compare(&one.neg()) != std::cmp::Ordering::Greater {
        return Real::nan();
    }
    log(&one.add(x).div(&one.sub(x))).div_small(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn cosh_squared_minus_sinh_squared_is_one() {
        let x = Real::from_u64(2);
        let s = sinh(&x);
        let c = cosh(&x);
        let diff = c.mul(&c).sub(&s.mul(&s)).sub(&Real::from_u64(1));
        assert!(crate::detail::is_negligible(&diff));
    }

    #[test]
    fn asinh_of_sinh_recovers_argument() {
        let x = Real::from_u64(1).div_small(3);
        let back = asinh(&sinh(&x));
        assert!(crate::detail::is_negligible(&back.sub(&x)));
    }

    #[test]
    fn acosh_of_value_below_one_is_nan() {
        assert!(acosh(&Real::zero()).is_nan());
    }

    #[test]
    fn atanh_of_zero_is_zero() {
        assert_eq!(atanh(&Real::zero()).compare(&Real::zero()), Ordering::Equal);
    }
}

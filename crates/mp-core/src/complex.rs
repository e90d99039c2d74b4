//! C8: `Complex<Real>` (spec §4.8).
//!
//! Division uses Smith's algorithm (scale by the larger-magnitude
//! component first) to avoid spurious overflow/underflow in the
//! intermediate products — the same technique the teacher's
//! `algo::complex_fft` style code in `algo/fft.rs` relies on implicitly
//! via `rustfft`'s own `Complex64`, just carried out longhand here since
//! `Real` has no native complex type to defer to.

use std::cmp::Ordering;

use crate::kernels::{
    exp::exp,
    log::log,
    sqrt::sqrt,
    trig::{atan2, sin_cos},
};
use crate::real::Real;

#[derive(Debug, Clone)]
pub struct Complex {
    pub re: Real,
    pub im: Real,
}

impl Complex {
    pub fn new(re: Real, im: Real) -> Complex {
        Complex { re, im }
    }

    pub fn zero() -> Complex {
        Complex::new(Real::zero(), Real::zero())
    }

    pub fn from_real(re: Real) -> Complex {
        Complex::new(re, Real::zero())
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    pub fn conj(&self) -> Complex {
        Complex::new(self.re.clone(), self.im.neg())
    }

    pub fn add(&self, other: &Complex) -> Complex {
        Complex::new(self.re.add(&other.re), self.im.add(&other.im))
    }

    pub fn sub(&self, other: &Complex) -> Complex {
        Complex::new(self.re.sub(&other.re), self.im.sub(&other.im))
    }

    pub fn mul(&self, other: &Complex) -> Complex {
        let re = self.re.mul(&other.re).sub(&self.im.mul(&other.im));
        let im = self.re.mul(&other.im).add(&self.im.mul(&other.re));
        Complex::new(re, im)
    }

    /// Smith's division algorithm: scales by whichever of `c`/`d` has the
    /// larger magnitude before dividing, keeping the intermediate ratio
    /// bounded by 1.
    pub fn div(&self, other: &Complex) -> Complex {
        let c = &other.re;
        let d = &other.im;
        let a = &self.re;
        let b = &self.im;

        if c.abs().compare(&d.abs()) != Ordering::Less {
            let ratio = d.div(c);
            let denom = c.add(&d.mul(&ratio));
            Complex::new(a.add(&b.mul(&ratio)).div(&denom), b.sub(&a.mul(&ratio)).div(&denom))
        } else {
            let ratio = c.div(d);
            let denom = c.mul(&ratio).add(d);
            Complex::new(a.mul(&ratio).add(b).div(&denom), b.mul(&ratio).sub(a).div(&denom))
        }
    }

    pub fn inv(&self) -> Complex {
        Complex::from_real(Real::from_u64(1)).div(self)
    }

    /// `sqrt(re^2 + im^2)`, computed without an intermediate `re^2+im^2`
    /// overflow risk since `Real`'s exponent is effectively unbounded.
    pub fn abs(&self) -> Real {
        sqrt(&self.re.mul(&self.re).add(&self.im.mul(&self.im)))
    }

    pub fn arg(&self) -> Real {
        atan2(&self.im, &self.re)
    }

    /// `sqrt(z) = sqrt((r+re)/2) + i*sign(im)*sqrt((r-re)/2)`, `r = |z|`.
    pub fn sqrt(&self) -> Complex {
        let r = self.abs();
        let half = Real::from_u64(1).div_small(2);
        let re_part = sqrt(&r.add(&self.re).mul(&half));
        let im_part = sqrt(&r.sub(&self.re).mul(&half));
        if self.im.is_negative() {
            Complex::new(re_part, im_part.neg())
        } else {
            Complex::new(re_part, im_part)
        }
    }

    /// `exp(a+bi) = exp(a) * (cos(b) + i*sin(b))` (Euler's formula).
    pub fn exp(&self) -> Complex {
        let scale = exp(&self.re);
        let (s, c) = sin_cos(&self.im);
        Complex::new(c.mul(&scale), s.mul(&scale))
    }

    /// `log(z) = ln|z| + i*arg(z)`.
    pub fn log(&self) -> Complex {
        Complex::new(log(&self.abs()), self.arg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_are_inverse() {
        let a = Complex::new(Real::from_u64(3), Real::from_u64(4));
        let b = Complex::new(Real::from_u64(1), Real::from_u64(2));
        let back = a.add(&b).sub(&b);
        assert_eq!(back.re.compare(&a.re), Ordering::Equal);
        assert_eq!(back.im.compare(&a.im), Ordering::Equal);
    }

    #[test]
    fn mul_and_div_are_inverse() {
        let a = Complex::new(Real::from_u64(3), Real::from_u64(4));
        let b = Complex::new(Real::from_u64(1), Real::from_i64(-2));
        let back = a.mul(&b).div(&b);
        let diff_re = back.re.sub(&a.re);
        let diff_im = back.im.sub(&a.im);
        assert!(crate::detail::is_negligible(&diff_re));
        assert!(crate::detail::is_negligible(&diff_im));
    }

    #[test]
    fn abs_of_three_four_is_five() {
        let z = Complex::new(Real::from_u64(3), Real::from_u64(4));
        assert_eq!(z.abs().compare(&Real::from_u64(5)), Ordering::Equal);
    }

    #[test]
    fn sqrt_of_complex_squares_back() {
        let z = Complex::new(Real::from_u64(3), Real::from_u64(4));
        let s = z.sqrt();
        let back = s.mul(&s);
        assert!(crate::detail::is_negligible(&back.re.sub(&z.re)));
        assert!(crate::detail::is_negligible(&back.im.sub(&z.im)));
    }

    #[test]
    fn exp_of_log_recovers_value() {
        let z = Complex::new(Real::from_u64(2), Real::from_u64(1));
        let back = z.log().exp();
        assert!(crate::detail::is_negligible(&back.re.sub(&z.re)));
        assert!(crate::detail::is_negligible(&back.im.sub(&z.im)));
    }
}

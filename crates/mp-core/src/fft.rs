//! C6: FFT multiplier (spec §4.6).
//!
//! Splits each operand's limbs into base-`10^4` half-limbs, convolves
//! them via a complex-to-complex FFT (the plan cache and scratch buffers
//! come from [`CorePrecision::with_fft_scratch`]), and recombines the
//! convolution into base-`10^8` limbs. Grounded in the teacher's
//! `algo/fft.rs` `unified_fft_step`: plain `Complex64` throughout (no
//! half-complex real-FFT packing), `rayon::join` for the two forward
//! transforms, float rounding with a final sequential carry-propagation
//! pass.

use rustfft::num_complex::Complex64;

use crate::config::{thresholds, LIMB_HALF_BASE};
use crate::limb::LimbArray;
use crate::precision::CorePrecision;

/// Multiplies the leading `prec_mul` limbs of `a` and `b`, writing an
/// `n`-limb result in the same "assume exponent += 8" convention used by
/// the schoolbook path: if the returned array's limb `0` is `0`, the
/// caller re-normalizes by shifting left one limb and backing `exp` off
/// by 8 (spec §4.5.3).
pub fn fft_multiply(a: &LimbArray, b: &LimbArray, prec_mul: usize, n: usize) -> LimbArray {
    let p = prec_mul.min(n).max(1);
    let half_len = 2 * p;
    let required_len = (4 * p).max(4);

    let core = CorePrecision::global();
    let mut out = LimbArray::zeroed(n);

    core.with_fft_scratch(required_len, |plan, scratch| {
        let len = plan.len;

        scratch.buf_u.iter_mut().for_each(|c| *c = Complex64::new(0.0, 0.0));
        scratch.buf_v.iter_mut().for_each(|c| *c = Complex64::new(0.0, 0.0));

        split_half_limbs(a, p, &mut scratch.buf_u[..half_len]);
        split_half_limbs(b, p, &mut scratch.buf_v[..half_len]);

        if len >= thresholds::FFT_PARALLEL_MIN_LEN && core.fft_threads() > 1 {
            let forward = &plan.forward;
            let buf_u = &mut scratch.buf_u;
            let buf_v = &mut scratch.buf_v;
            rayon::join(|| forward.process(buf_u), || forward.process(buf_v));
        } else {
            plan.forward.process(&mut scratch.buf_u);
            plan.forward.process(&mut scratch.buf_v);
        }

        for i in 0..len {
            scratch.buf_u[i] *= scratch.buf_v[i];
        }

        plan.inverse.process(&mut scratch.buf_u);

        let scale = 1.0 / len as f64;
        recombine_half_limbs(&scratch.buf_u, len, scale, out.as_mut_slice(), n);
    });

    out
}

/// Splits the leading `p` limbs of `src` into `2p` base-`10^4` half-limbs,
/// most significant half first, placed into `out[0..2p]`.
fn split_half_limbs(src: &LimbArray, p: usize, out: &mut [Complex64]) {
    for i in 0..p {
        let limb = src.get(i);
        let hi = limb / LIMB_HALF_BASE;
        let lo = limb % LIMB_HALF_BASE;
        out[2 * i] = Complex64::new(hi as f64, 0.0);
        out[2 * i + 1] = Complex64::new(lo as f64, 0.0);
    }
}

/// Walks the convolution result from most to least significant half-limb
/// position, rounds (`+ 0.5` then truncate, per spec step 7), and
/// propagates carry in base `10^4` across the convolution's *entire*
/// natural width (`len`, which always covers the true non-zero support
/// `0..=4p-2`) so that carries generated by the dropped low-order
/// half-limbs are fully absorbed before truncation.
///
/// Position `0` of the convolution sits at weight `base^{2p-1}` — the
/// same "guard" weight `mul`'s whole-limb shift expects at `data[0]`.
/// But unlike schoolbook multiplication, where every accumulator slot
/// lines up on a whole-limb boundary, half-limb splitting can place the
/// product's most significant *non-zero* content one half-limb (not one
/// limb) below that guard position — e.g. multiplying two operands each
/// smaller than `LIMB_HALF_BASE` (10^4) leaves both `half[0]` and
/// `half[1]` zero even though the product itself does not vanish. A
/// single whole-limb shift in `mul` cannot correct a half-limb residual,
/// so the pairing here is built asymmetrically: `out[0]` takes `half[0]`
/// alone (the guard, matching schoolbook's carry-out position exactly),
/// and every subsequent limb pairs `half[2m-1]` (hi) with `half[2m]`
/// (lo) — i.e. the pairing boundary after the guard is offset by one
/// half-limb relative to the convolution's own indexing, not aligned to
/// the raw even/odd index. This keeps `out[0]`'s zero-or-not state the
/// sole signal `mul` needs. A residual carry out of position `0`
/// (vanishingly rare at these magnitudes) is folded directly into the
/// guard rather than growing the limb count by a fractional limb.
fn recombine_half_limbs(buf: &[Complex64], len: usize, scale: f64, out: &mut [u32], n: usize) {
    let half_base = LIMB_HALF_BASE as i64;
    let mut half = vec![0i64; len];

    let mut carry: i64 = 0;
    for k in (0..len).rev() {
        let v = (buf[k].re * scale + 0.5).floor() as i64 + carry;
        half[k] = v.rem_euclid(half_base);
        carry = v.div_euclid(half_base);
    }

    let get = |idx: usize| -> i64 { if idx < len { half[idx] } else { 0 } };

    out[0] = (get(0) + carry * half_base) as u32;
    for m in 1..n {
        let hi = get(2 * m - 1);
        let lo = get(2 * m);
        out[m] = (hi * half_base + lo) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fft_multiply_matches_schoolbook_on_small_operands() {
        let n = crate::precision::CorePrecision::global().elem_number();
        let mut a = LimbArray::zeroed(n);
        a.set(0, 12345678);
        a.set(1, 87654321);
        let mut b = LimbArray::zeroed(n);
        b.set(0, 11111111);
        b.set(1, 22222222);

        let fft_result = fft_multiply(&a, &b, 2, n);
        let schoolbook_result = crate::real::schoolbook_multiply(&a, &b, 2, n);

        // Small exact integers: both paths must agree bit-for-bit on the
        // leading limbs (no floating-point rounding should be visible at
        // this magnitude).
        assert_eq!(fft_result.get(0), schoolbook_result.get(0));
        assert_eq!(fft_result.get(1), schoolbook_result.get(1));
        assert_eq!(fft_result.get(2), schoolbook_result.get(2));
    }
}

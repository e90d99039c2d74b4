//! C5: `Real` — the arbitrary-precision decimal value (spec §4.5).
//!
//! A `Real` is `sign × Σ data[i]·B^(k-i)` where `k = exp / 8` and `B` is
//! [`config::LIMB_BASE`]. `data[0]` is non-zero for every non-zero finite
//! value (justified form); `exp` is always a multiple of 8.

use std::cmp::Ordering;

use crate::base_num::{add_loop, compare_data, div_loop_by_small, mul_loop_by_small, sub_loop, FpClass};
use crate::config::{self, thresholds, LIMB_DIGITS10};
use crate::error::MpError;
use crate::limb::LimbArray;
use crate::precision::CorePrecision;

#[derive(Debug, Clone)]
pub struct Real {
    sign: bool,
    exp: i64,
    data: LimbArray,
    fpclass: FpClass,
    prec_elem: usize,
}

impl Real {
    fn zeroed_data() -> LimbArray {
        LimbArray::zeroed(CorePrecision::global().elem_number())
    }

    pub fn zero() -> Real {
        let n = CorePrecision::global().elem_number();
        Real {
            sign: false,
            exp: 0,
            data: LimbArray::zeroed(n),
            fpclass: FpClass::Finite,
            prec_elem: n,
        }
    }

    pub fn nan() -> Real {
        let mut r = Real::zero();
        r.fpclass = FpClass::Nan;
        r
    }

    pub fn infinity(sign: bool) -> Real {
        let mut r = Real::zero();
        r.fpclass = FpClass::Inf;
        r.sign = sign;
        r
    }

    pub fn from_u64(v: u64) -> Real {
        if v == 0 {
            return Real::zero();
        }
        let base = config::LIMB_BASE as u64;
        let mut digs = Vec::with_capacity(3);
        let mut x = v;
        while x > 0 {
            digs.push((x % base) as u32);
            x /= base;
        }
        digs.reverse();

        let mut data = Self::zeroed_data();
        for (i, d) in digs.iter().enumerate() {
            data.set(i, *d);
        }
        let n = data.len();
        Real {
            sign: false,
            exp: 8 * (digs.len() as i64 - 1),
            data,
            fpclass: FpClass::Finite,
            prec_elem: n,
        }
    }

    pub fn from_i64(v: i64) -> Real {
        let mut r = Real::from_u64(v.unsigned_abs());
        r.sign = v < 0;
        r
    }

    /// Decomposes `v` into an integer mantissa and binary exponent (spec
    /// §4.5.1 "From `long double`": binary mantissa/exponent extraction
    /// plus an integer term scaled by `pow2(exponent)`), special-casing
    /// non-finite values.
    pub fn from_f64(v: f64) -> Real {
        if v.is_nan() {
            return Real::nan();
        }
        if v.is_infinite() {
            return Real::infinity(v < 0.0);
        }
        if v == 0.0 {
            return Real::zero();
        }

        let sign = v.is_sign_negative();
        let bits = v.abs().to_bits();
        let raw_exp = ((bits >> 52) & 0x7ff) as i64;
        let raw_mantissa = bits & 0x000f_ffff_ffff_ffff;

        let (mantissa, exp2) = if raw_exp == 0 {
            (raw_mantissa, -1074i64)
        } else {
            (raw_mantissa | (1u64 << 52), raw_exp - 1075)
        };

        let magnitude = Real::from_u64(mantissa).mul(&crate::kernels::pow2::pow2(exp2));
        let mut r = magnitude;
        r.sign = sign && !r.is_zero();
        r
    }

    pub fn parse(s: &str) -> Result<Real, MpError> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars().peekable();
        let mut sign = false;
        if let Some(&c) = chars.peek() {
            if c == '+' || c == '-' {
                sign = c == '-';
                chars.next();
            }
        }
        let rest: String = chars.collect();
        if rest.is_empty() {
            return Err(MpError::ParseError {
                input: s.to_string(),
                reason: "empty mantissa".to_string(),
            });
        }

        let (mantissa_part, exp_part) = match rest.find(|c| c == 'e' || c == 'E') {
            Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
            None => (&rest[..], None),
        };
        let (int_part, frac_part) = match mantissa_part.find('.') {
            Some(idx) => (&mantissa_part[..idx], &mantissa_part[idx + 1..]),
            None => (mantissa_part, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(MpError::ParseError {
                input: s.to_string(),
                reason: "no digits in mantissa".to_string(),
            });
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MpError::ParseError {
                input: s.to_string(),
                reason: "non-digit character in mantissa".to_string(),
            });
        }

        let e_exponent: i64 = match exp_part {
            None => 0,
            Some("") => {
                return Err(MpError::ParseError {
                    input: s.to_string(),
                    reason: "empty exponent".to_string(),
                })
            }
            Some(e) => e.parse::<i64>().map_err(|_| MpError::ParseError {
                input: s.to_string(),
                reason: "malformed exponent".to_string(),
            })?,
        };

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let exp_frac = e_exponent - frac_part.len() as i64;

        let stripped_leading = digits.trim_start_matches('0');
        if stripped_leading.is_empty() {
            return Ok(Real::zero());
        }
        let digit_str = stripped_leading.trim_end_matches('0');
        let removed = stripped_leading.len() - digit_str.len();
        let exp_frac = exp_frac + removed as i64;
        if digit_str.is_empty() {
            return Ok(Real::zero());
        }

        let z = exp_frac.rem_euclid(8) as usize;
        let newexp = exp_frac - z as i64;

        let l_padded = digit_str.len() + z;
        let lead = (8 - (l_padded % 8)) % 8;
        let total_len = lead + l_padded;
        let m = total_len / 8;

        let mut padded = String::with_capacity(total_len);
        padded.extend(std::iter::repeat('0').take(lead));
        padded.push_str(digit_str);
        padded.extend(std::iter::repeat('0').take(z));

        let n = CorePrecision::global().elem_number();
        let limb_count = m.min(n);

        let mut data = Self::zeroed_data();
        for i in 0..limb_count {
            let chunk = &padded[i * 8..i * 8 + 8];
            let value: u32 = chunk.parse().map_err(|_| MpError::ParseError {
                input: s.to_string(),
                reason: "malformed digit group".to_string(),
            })?;
            data.set(i, value);
        }

        let exp = newexp + 8 * (m as i64 - 1);
        if exp % 8 != 0 {
            return Err(MpError::ParseError {
                input: s.to_string(),
                reason: "resulting exponent not divisible by 8".to_string(),
            });
        }

        Ok(Real {
            sign,
            exp,
            data,
            fpclass: FpClass::Finite,
            prec_elem: n,
        })
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.fpclass == FpClass::Nan
    }

    #[inline]
    pub fn is_inf(&self) -> bool {
        self.fpclass == FpClass::Inf
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.fpclass == FpClass::Finite && self.data.get(0) == 0
    }

    #[inline]
    pub fn exp(&self) -> i64 {
        self.exp
    }

    #[inline]
    pub fn prec_elem(&self) -> usize {
        self.prec_elem
    }

    pub fn set_prec_elem(&mut self, p: usize) {
        self.prec_elem = p.clamp(8, self.data.len());
    }

    pub fn data(&self) -> &LimbArray {
        &self.data
    }

    /// Leftmost decimal exponent: `exp + floor(log10(limb[0]))` (GLOSSARY
    /// "Order").
    pub fn order(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        self.exp + digit_count(self.data.get(0)) as i64 - 1
    }

    pub fn neg(&self) -> Real {
        let mut r = self.clone();
        if !r.is_zero() {
            r.sign = !r.sign;
        }
        r
    }

    /// Scales `self` by an exact power of ten. `exp` only tracks
    /// multiples of 8, so the `k mod 8` remainder is applied through the
    /// existing small-integer multiply/divide paths (at most 7 limb-array
    /// passes) and the `k / 8` quotient folds straight into `exp`.
    pub fn scale_pow10(&self, k: i64) -> Real {
        if self.is_zero() || self.is_nan() || self.is_inf() {
            return self.clone();
        }
        let q = k.div_euclid(8);
        let r = k.rem_euclid(8);
        let mut result = self.clone();
        for _ in 0..r {
            result = result.mul_small(10);
        }
        result.exp += 8 * q;
        result
    }

    pub fn abs(&self) -> Real {
        let mut r = self.clone();
        r.sign = false;
        r
    }

    /// Low-precision seed for Newton/AGM iterations (spec §4.7 "Initial
    /// `y ≈ 1/double(x)`" and friends).
    pub fn to_f64_approx(&self) -> f64 {
        match self.fpclass {
            FpClass::Nan => return f64::NAN,
            FpClass::Inf => return if self.sign { f64::NEG_INFINITY } else { f64::INFINITY },
            FpClass::Finite => {}
        }
        if self.is_zero() {
            return 0.0;
        }

        let limb0 = self.data.get(0);
        let limb1 = if self.data.len() > 1 { self.data.get(1) } else { 0 };
        let digits = format!("{}{:08}", limb0, limb1);
        let order = self.order();

        let mut literal = String::new();
        if self.sign {
            literal.push('-');
        }
        let bytes = digits.as_bytes();
        literal.push(bytes[0] as char);
        literal.push('.');
        if bytes.len() > 1 {
            literal.push_str(&digits[1..]);
        } else {
            literal.push('0');
        }
        literal.push('e');
        literal.push_str(&order.to_string());

        literal.parse::<f64>().unwrap_or(0.0)
    }

    /// The unsigned leading-digit mantissa of `self`, in `[1, 10)`, with
    /// the decimal exponent stripped off. Used to seed Newton iterations
    /// whose true exponent would overflow `f64` (spec §4.7 "Initial `y`
    /// from... a double-precision estimate").
    pub fn mantissa_f64(&self) -> f64 {
        if self.is_zero() || self.is_nan() || self.is_inf() {
            return self.to_f64_approx();
        }
        let limb0 = self.data.get(0);
        let limb1 = if self.data.len() > 1 { self.data.get(1) } else { 0 };
        let digits = format!("{}{:08}", limb0, limb1);
        let bytes = digits.as_bytes();

        let mut literal = String::new();
        literal.push(bytes[0] as char);
        literal.push('.');
        if bytes.len() > 1 {
            literal.push_str(&digits[1..]);
        } else {
            literal.push('0');
        }
        literal.parse::<f64>().unwrap_or(1.0)
    }

    fn full_digit_string(&self) -> String {
        let limb0 = self.data.get(0);
        let mut s = limb0.to_string();
        for i in 1..self.data.len() {
            s.push_str(&format!("{:08}", self.data.get(i)));
        }
        s
    }

    /// Renders `self` to `digits10` significant decimal digits using
    /// round-half-to-even, in fixed notation (spec §4.5.1 `write_string`).
    pub fn write_string(&self, digits10: i32) -> String {
        match self.fpclass {
            FpClass::Nan => return "nan".to_string(),
            FpClass::Inf => return format!("{}inf", if self.sign { "-" } else { "" }),
            FpClass::Finite => {}
        }

        let digits10 = digits10.max(1) as usize;
        if self.is_zero() {
            return if digits10 > 1 {
                format!("0.{}", "0".repeat(digits10 - 1))
            } else {
                "0".to_string()
            };
        }

        let full = self.full_digit_string();
        let (mut sig, carried) = round_half_even(&full, digits10);
        let order = self.order() + if carried { 1 } else { 0 };

        let sign_str = if self.sign { "-" } else { "" };

        if order >= 0 {
            let int_len = order as usize + 1;
            while sig.len() < int_len {
                sig.push('0');
            }
            let (int_part, frac_part) = sig.split_at(int_len);
            if frac_part.is_empty() {
                format!("{}{}", sign_str, int_part)
            } else {
                format!("{}{}.{}", sign_str, int_part, frac_part)
            }
        } else {
            let leading_zeros = (-order - 1) as usize;
            format!("{}0.{}{}", sign_str, "0".repeat(leading_zeros), sig)
        }
    }

    fn align_shifted(src: &LimbArray, shift: i64, n: usize) -> LimbArray {
        let mut out = LimbArray::zeroed(n);
        if shift >= 0 {
            let shift = shift as usize;
            if shift < n {
                let copy_len = (n - shift).min(src.len());
                if copy_len > 0 {
                    out.copy_from(shift, src, 0, copy_len);
                }
            }
        } else {
            let shift = (-shift) as usize;
            if shift < src.len() {
                let copy_len = (src.len() - shift).min(n);
                if copy_len > 0 {
                    out.copy_from(0, src, shift, copy_len);
                }
            }
        }
        out
    }

    pub fn add(&self, other: &Real) -> Real {
        if self.is_nan() || other.is_nan() {
            return Real::nan();
        }
        if self.is_inf() || other.is_inf() {
            return match (self.is_inf(), other.is_inf()) {
                (true, true) => {
                    if self.sign == other.sign {
                        Real::infinity(self.sign)
                    } else {
                        Real::nan()
                    }
                }
                (true, false) => Real::infinity(self.sign),
                (false, true) => Real::infinity(other.sign),
                (false, false) => unreachable!(),
            };
        }
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let n = self.data.len();
        let prec = self.prec_elem.min(other.prec_elem);
        let ofs = (self.exp - other.exp) / 8;

        if ofs.unsigned_abs() as usize >= prec {
            return if ofs > 0 { self.clone() } else { other.clone() };
        }

        if self.sign == other.sign {
            let mut result_data = self.data.clone();
            let shifted = Self::align_shifted(&other.data, ofs, n);
            let carry = add_loop(result_data.as_mut_slice(), shifted.as_slice(), n);
            let mut exp = self.exp;
            if carry != 0 {
                result_data.copy_within(0..n - 1, 1);
                result_data.set(0, carry);
                exp += 8;
            }
            Real {
                sign: self.sign,
                exp,
                data: result_data,
                fpclass: FpClass::Finite,
                prec_elem: prec.max(8),
            }
        } else {
            let shifted = Self::align_shifted(&other.data, ofs, n);
            let (mut larger, smaller, result_sign, exp) =
                match compare_data(self.data.as_slice(), shifted.as_slice(), i32::MAX) {
                    Ordering::Less => (shifted, self.data.clone(), other.sign, self.exp),
                    _ => (self.data.clone(), shifted, self.sign, self.exp),
                };
            sub_loop(larger.as_mut_slice(), smaller.as_slice(), n);
            match larger.first_nonzero() {
                None => Real::zero(),
                Some(shift) if shift > 0 => {
                    larger.copy_within(shift..n, 0);
                    larger.fill_range(n - shift..n, 0);
                    Real {
                        sign: result_sign,
                        exp: exp - 8 * shift as i64,
                        data: larger,
                        fpclass: FpClass::Finite,
                        prec_elem: prec.max(8),
                    }
                }
                _ => Real {
                    sign: result_sign,
                    exp,
                    data: larger,
                    fpclass: FpClass::Finite,
                    prec_elem: prec.max(8),
                },
            }
        }
    }

    pub fn sub(&self, other: &Real) -> Real {
        self.add(&other.neg())
    }

    pub fn mul_small(&self, n: i64) -> Real {
        if self.is_nan() {
            return Real::nan();
        }
        if self.is_inf() {
            if n == 0 {
                return Real::nan();
            }
            return Real::infinity(self.sign ^ (n < 0));
        }
        if n == 0 || self.is_zero() {
            return Real::zero();
        }
        if n.unsigned_abs() >= config::LIMB_BASE as u64 {
            return self.mul(&Real::from_i64(n));
        }

        let mut data = self.data.clone();
        let len = data.len();
        let carry = mul_loop_by_small(data.as_mut_slice(), n.unsigned_abs() as u32, len);
        let mut exp = self.exp;
        if carry != 0 {
            data.copy_within(0..len - 1, 1);
            data.set(0, carry);
            exp += 8;
        }
        Real {
            sign: self.sign ^ (n < 0),
            exp,
            data,
            fpclass: FpClass::Finite,
            prec_elem: self.prec_elem,
        }
    }

    pub fn mul(&self, other: &Real) -> Real {
        if self.is_nan() || other.is_nan() {
            return Real::nan();
        }
        if self.is_inf() || other.is_inf() {
            if self.is_zero() || other.is_zero() {
                return Real::nan();
            }
            return Real::infinity(self.sign ^ other.sign);
        }
        if self.is_zero() || other.is_zero() {
            return Real::zero();
        }

        let prec_mul = self.prec_elem.min(other.prec_elem);
        let n = self.data.len();
        let sign = self.sign ^ other.sign;
        let base_exp = self.exp + other.exp;

        let mut data = if prec_mul < thresholds::SCHOOLBOOK_LIMB_MAX {
            schoolbook_multiply(&self.data, &other.data, prec_mul, n)
        } else {
            crate::fft::fft_multiply(&self.data, &other.data, prec_mul, n)
        };

        let mut exp = base_exp + 8;
        if data.get(0) == 0 {
            data.copy_within(1..n, 0);
            data.set(n - 1, 0);
            exp -= 8;
        }

        Real {
            sign,
            exp,
            data,
            fpclass: FpClass::Finite,
            prec_elem: prec_mul.max(8),
        }
    }

    pub fn div_small(&self, n: i64) -> Real {
        if self.is_nan() {
            return Real::nan();
        }
        if n == 0 {
            return if self.is_zero() { Real::nan() } else { Real::infinity(self.sign) };
        }
        if self.is_inf() {
            return Real::infinity(self.sign ^ (n < 0));
        }
        if self.is_zero() {
            return Real::zero();
        }

        let base = config::LIMB_BASE as i64;
        if n.unsigned_abs() as i64 == base {
            let mut r = self.clone();
            r.sign ^= n < 0;
            r.exp -= 8;
            return r;
        }
        if n.unsigned_abs() >= config::LIMB_BASE as u64 {
            return self.div(&Real::from_i64(n));
        }

        let mut data = self.data.clone();
        let len = data.len();
        let _remainder = div_loop_by_small(data.as_mut_slice(), n.unsigned_abs() as u32, len);

        let mut exp = self.exp;
        if data.get(0) == 0 {
            data.copy_within(1..len, 0);
            data.set(len - 1, 0);
            exp -= 8;
        }

        Real {
            sign: self.sign ^ (n < 0),
            exp,
            data,
            fpclass: FpClass::Finite,
            prec_elem: self.prec_elem,
        }
    }

    pub fn div(&self, other: &Real) -> Real {
        if self.is_nan() || other.is_nan() {
            return Real::nan();
        }
        match (self.is_inf(), other.is_inf()) {
            (true, true) => return Real::nan(),
            (true, false) => return Real::infinity(self.sign ^ other.sign),
            (false, true) => return Real::zero(),
            (false, false) => {}
        }
        if other.is_zero() {
            return if self.is_zero() { Real::nan() } else { Real::infinity(self.sign) };
        }
        if self.is_zero() {
            return Real::zero();
        }
        self.mul(&crate::kernels::inv::inv(other))
    }

    /// Total order with `NaN` greater than everything (spec §4.5.5, §7,
    /// Open Question: "implementation-defined... document and test").
    pub fn compare(&self, other: &Real) -> Ordering {
        let self_nan = self.is_nan();
        let other_nan = other.is_nan();
        if self_nan && other_nan {
            return Ordering::Equal;
        }
        if self_nan {
            return Ordering::Greater;
        }
        if other_nan {
            return Ordering::Less;
        }

        match (self.is_inf(), other.is_inf()) {
            (true, true) => {
                return match (self.sign, other.sign) {
                    (a, b) if a == b => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => unreachable!(),
                }
            }
            (true, false) => return if self.sign { Ordering::Less } else { Ordering::Greater },
            (false, true) => return if other.sign { Ordering::Greater } else { Ordering::Less },
            (false, false) => {}
        }

        let self_zero = self.is_zero();
        let other_zero = other.is_zero();
        if self_zero && other_zero {
            return Ordering::Equal;
        }
        if self_zero {
            return if other.sign { Ordering::Greater } else { Ordering::Less };
        }
        if other_zero {
            return if self.sign { Ordering::Less } else { Ordering::Greater };
        }

        if self.sign != other.sign {
            return if self.sign { Ordering::Less } else { Ordering::Greater };
        }

        let mag_order = if self.exp != other.exp {
            self.exp.cmp(&other.exp)
        } else {
            let digits10_tol = CorePrecision::global().digits().digits10_tol();
            let limit = ((self.prec_elem.min(other.prec_elem) as i64) * LIMB_DIGITS10 as i64)
                .min(digits10_tol as i64) as i32;
            compare_data(self.data.as_slice(), other.data.as_slice(), limit)
        };

        if self.sign {
            mag_order.reverse()
        } else {
            mag_order
        }
    }
}

fn digit_count(mut v: u32) -> usize {
    if v == 0 {
        return 1;
    }
    let mut c = 0;
    while v > 0 {
        c += 1;
        v /= 10;
    }
    c
}

/// Rounds the leading `keep` digits of `full` using round-half-to-even,
/// returning the rounded digit string (always exactly `keep` digits,
/// zero-padded on the right if `full` was shorter) and whether rounding
/// carried out of the most significant digit (spec §4.5.1 "round to
/// requested digit count using round-half-to-even").
fn round_half_even(full: &str, keep: usize) -> (String, bool) {
    if full.len() <= keep {
        let mut s = full.to_string();
        s.push_str(&"0".repeat(keep - full.len()));
        return (s, false);
    }

    let bytes = full.as_bytes();
    let mut digits: Vec<u8> = bytes[..keep].iter().map(|&b| b - b'0').collect();
    let first_tail = bytes[keep] - b'0';
    let rest_is_zero = bytes[keep + 1..].iter().all(|&b| b == b'0');

    let round_up = match first_tail.cmp(&5) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => {
            if !rest_is_zero {
                true
            } else {
                digits.last().copied().unwrap_or(0) % 2 == 1
            }
        }
    };

    let mut carried = false;
    if round_up {
        let mut carry = true;
        let mut i = keep;
        while i > 0 && carry {
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                carry = false;
            }
        }
        if carry {
            digits.insert(0, 1);
            digits.pop();
            carried = true;
        }
    }

    let s: String = digits.iter().map(|&d| (d + b'0') as char).collect();
    (s, carried)
}

/// Schoolbook O(p^2) multiplication into a `(p+1)`-limb accumulator
/// (spec §4.5.3). Both inputs are read through their leading `prec_mul`
/// limbs only.
pub(crate) fn schoolbook_multiply(a: &LimbArray, b: &LimbArray, prec_mul: usize, n: usize) -> LimbArray {
    let base = config::LIMB_BASE as u64;
    let p = prec_mul.min(n).max(1);

    let mut acc = vec![0u64; 2 * p];
    for i in 0..p {
        let ai = a.get(i) as u64;
        if ai == 0 {
            continue;
        }
        for j in 0..p {
            acc[i + j] += ai * (b.get(j) as u64);
        }
    }

    let mut carry: u64 = 0;
    for k in (0..2 * p - 1).rev() {
        let v = acc[k] + carry;
        acc[k] = v % base;
        carry = v / base;
    }

    let mut data = LimbArray::zeroed(n);
    if carry != 0 {
        data.set(0, carry as u32);
        let count = (n - 1).min(p);
        for idx in 0..count {
            data.set(idx + 1, acc[idx] as u32);
        }
    } else {
        let count = (n - 1).min(p);
        for idx in 0..count {
            data.set(idx + 1, acc[idx] as u32);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64_roundtrips_small_values() {
        let r = Real::from_u64(42);
        assert_eq!(r.to_f64_approx(), 42.0);
        assert!(!r.is_negative());
    }

    #[test]
    fn from_i64_preserves_sign() {
        let r = Real::from_i64(-7);
        assert!(r.is_negative());
        assert_eq!(r.to_f64_approx(), -7.0);
    }

    #[test]
    fn parse_simple_decimal() {
        let r = Real::parse("3.14159").unwrap();
        assert!((r.to_f64_approx() - 3.14159).abs() < 1e-9);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Real::parse("not-a-number").is_err());
    }

    #[test]
    fn write_string_formats_integer_part() {
        let r = Real::from_u64(123);
        assert_eq!(r.write_string(3), "123");
    }

    #[test]
    fn write_string_formats_fraction() {
        let r = Real::parse("0.5").unwrap();
        assert_eq!(r.write_string(3), "0.500");
    }

    #[test]
    fn add_then_subtract_recovers_operand() {
        let a = Real::from_u64(12345);
        let b = Real::from_u64(987);
        let sum = a.add(&b);
        let back = sum.sub(&b);
        assert_eq!(back.compare(&a), Ordering::Equal);
    }

    #[test]
    fn mul_then_div_recovers_operand() {
        let a = Real::from_u64(99991);
        let b = Real::from_u64(7);
        let prod = a.mul(&b);
        let back = prod.div_small(7);
        assert_eq!(back.compare(&a), Ordering::Equal);
    }

    #[test]
    fn compare_orders_by_magnitude_and_sign() {
        let a = Real::from_i64(-5);
        let b = Real::from_i64(3);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn nan_compares_greater_than_everything() {
        let nan = Real::nan();
        let finite = Real::from_u64(1);
        assert_eq!(nan.compare(&finite), Ordering::Greater);
        assert_eq!(finite.compare(&nan), Ordering::Less);
    }

    #[test]
    fn division_by_zero_yields_signed_infinity() {
        let a = Real::from_u64(5);
        let zero = Real::zero();
        let r = a.div(&zero);
        assert!(r.is_inf());
        assert!(!r.is_negative());
    }

    #[test]
    fn zero_divided_by_zero_yields_nan() {
        let zero = Real::zero();
        assert!(zero.div(&zero).is_nan());
    }

    #[test]
    fn mul_of_small_operands_agrees_between_schoolbook_and_fft_dispatch() {
        // Both operands are single-limb and well below LIMB_HALF_BASE, the
        // exact shape that exposed the half-limb misalignment: FFT used to
        // scale the result up by a spurious factor of LIMB_HALF_BASE.
        let mut a = Real::from_u64(6);
        let mut b = Real::from_u64(7);

        a.set_prec_elem(thresholds::SCHOOLBOOK_LIMB_MAX - 1);
        b.set_prec_elem(thresholds::SCHOOLBOOK_LIMB_MAX - 1);
        let schoolbook_product = a.mul(&b);
        assert_eq!(schoolbook_product.to_f64_approx(), 42.0);

        a.set_prec_elem(thresholds::SCHOOLBOOK_LIMB_MAX + 1);
        b.set_prec_elem(thresholds::SCHOOLBOOK_LIMB_MAX + 1);
        let fft_product = a.mul(&b);
        assert_eq!(fft_product.to_f64_approx(), 42.0);
    }
}

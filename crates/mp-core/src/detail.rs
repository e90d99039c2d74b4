//! C10: detail helpers shared by the function kernels (spec §4.7, §9).
//!
//! Hosts the AGM loop, the shared-prefix convergence check, and the
//! double-precision seed estimators. `Real`'s own string I/O
//! (`write_string`/`format_float_string`) stays on `Real` itself in
//! `real.rs` rather than here — it belongs next to the type it formats,
//! the way the teacher keeps formatting logic on the value type rather
//! than in a free-floating helper module.

use crate::config::thresholds;
use crate::precision::CorePrecision;
use crate::real::Real;

/// AGM iteration shared by π, ln 2, and `log` (GLOSSARY "AGM": `(a, b)
/// -> ((a+b)/2, sqrt(ab))`).
pub fn agm(mut a: Real, mut b: Real) -> (Real, Real) {
    let mut schedule = AdaptivePrecision::new();
    for _ in 0..thresholds::MAX_ITERATIONS {
        let p = schedule.current();
        a.set_prec_elem(p);
        b.set_prec_elem(p);
        if schedule.is_full_precision() && is_negligible(&a.sub(&b)) {
            break;
        }
        let a_next = a.add(&b).div_small(2);
        let b_next = crate::kernels::sqrt::sqrt(&a.mul(&b));
        a = a_next;
        b = b_next;
        schedule.advance();
    }
    (a, b)
}

/// Adaptive working-precision stepper (spec §4.7: "All use adaptive
/// precision: start from a double-precision estimate, then double the
/// working precision each iteration"). [`current`](Self::current) gives
/// the `prec_elem` the upcoming Newton/AGM step should run at;
/// [`advance`](Self::advance) grows it by
/// [`thresholds::PRECISION_GROWTH`] toward the process's full
/// `elem_number`, where it then holds. Early steps only need to refine
/// the handful of correct digits already supplied by the `f64` seed, so
/// running them at full precision would spend full-precision multiplies
/// (FFT-routed, at the default configuration) on work a few limbs could
/// do just as well.
pub struct AdaptivePrecision {
    working: usize,
    full: usize,
}

impl AdaptivePrecision {
    pub fn new() -> Self {
        let full = CorePrecision::global().digits().elem_number();
        // f64 carries ~17 significant decimal digits; two limbs (16
        // decimal digits) is the seed precision that roughly matches it
        // without overstating it.
        let seed = 2usize.min(full.max(1));
        AdaptivePrecision { working: seed, full }
    }

    /// The `prec_elem` the next step should run at.
    pub fn current(&self) -> usize {
        self.working
    }

    /// Whether the schedule has reached (and will stay at) full
    /// precision — the point at which a convergence check is meaningful.
    pub fn is_full_precision(&self) -> bool {
        self.working >= self.full
    }

    /// Grows the working precision for the following step.
    pub fn advance(&mut self) {
        if self.working < self.full {
            let grown = (self.working as f64 * thresholds::PRECISION_GROWTH).ceil() as usize;
            self.working = grown.max(self.working + 1).min(self.full);
        }
    }
}

impl Default for AdaptivePrecision {
    fn default() -> Self {
        Self::new()
    }
}

/// True once `r`'s order has dropped far enough below zero to be
/// negligible against a unit-magnitude reference — the cheap half of the
/// adaptive-precision convergence test (spec §4.7: "absolute order of
/// the iteration delta vs. a target exponent").
pub fn is_negligible(r: &Real) -> bool {
    if r.is_zero() {
        return true;
    }
    let tol = CorePrecision::global().digits().digits10_tol();
    r.order() <= -(tol as i64 / 2)
}

/// Shared-prefix convergence check (spec §9): counts matching leading
/// limbs between two same-exponent values and compares against
/// `tol_elems`, rather than computing `|a-b|/|a|`.
pub fn check_close_representation(a: &Real, b: &Real, tol_elems: usize) -> bool {
    if a.exp() != b.exp() {
        return false;
    }
    let matching = a
        .data()
        .as_slice()
        .iter()
        .zip(b.data().as_slice().iter())
        .take_while(|(x, y)| x == y)
        .count();
    matching >= tol_elems
}

/// `max(8, ceil(1.67*digits10 - log2(x)))` (spec §4.7 `log`).
pub fn log_m_parameter(digits10: i32, x: &Real) -> i64 {
    let log2x = x.order() as f64 * std::f64::consts::LOG2_10 + x.mantissa_f64().log2();
    ((1.67 * digits10 as f64 - log2x).ceil() as i64).max(8)
}

/// Rough double-precision estimate of `ln(x)`, used only to seed the
/// low/medium precision `exp` argument reduction (spec §4.7 `exp`).
pub fn log_estimate(x: f64) -> f64 {
    x.ln()
}

/// Rough double-precision estimate of `exp(x)`.
pub fn exp_estimate(x: f64) -> f64 {
    x.exp()
}

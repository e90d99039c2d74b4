//! C3: `CorePrecision` process-scoped singleton (spec §3, §4.3, §9).
//!
//! Holds the digit characteristics, the FFT plan cache (keyed by
//! transform length, every length a 5-smooth number), and the shared
//! FFT scratch buffers. Created at most once per process; idempotent
//! `configure` matches the teacher's `OnceLock<usize>`-backed
//! `PARALLEL_THRESHOLD` lazy-calibration pattern in
//! `algo/parallel.rs`, generalized from one cached value to a whole
//! configuration object.

use std::sync::{Arc, Mutex, OnceLock};

use rustfft::{num_complex::Complex64, Fft, FftPlanner};

use crate::config::limits;
use crate::digits::DigitCharacteristics;
use crate::error::MpError;

/// A cached forward/inverse FFT pair for one transform length.
#[derive(Clone)]
pub struct FftPlan {
    pub len: usize,
    pub forward: Arc<dyn Fft<f64>>,
    pub inverse: Arc<dyn Fft<f64>>,
}

/// Scratch buffers shared by every FFT-driven multiplication.
///
/// Resized lazily to the largest transform length requested so far;
/// never shrunk. Exclusive access is enforced by the `Mutex` wrapping
/// [`CoreInner`] — see [`CorePrecision::with_fft_scratch`].
pub struct FftScratch {
    pub buf_u: Vec<Complex64>,
    pub buf_v: Vec<Complex64>,
    /// Scratch limb buffer of length `N`, used by the schoolbook
    /// multiplication path for the `(p+1)`-limb accumulator (spec
    /// §4.5.3) and by division/normalization helpers.
    pub limb_scratch: Vec<u32>,
}

impl FftScratch {
    fn new(n: usize) -> Self {
        Self {
            buf_u: Vec::new(),
            buf_v: Vec::new(),
            limb_scratch: vec![0; n * 2 + 2],
        }
    }

    fn prepare(&mut self, len: usize) {
        if self.buf_u.len() != len {
            self.buf_u.resize(len, Complex64::new(0.0, 0.0));
            self.buf_v.resize(len, Complex64::new(0.0, 0.0));
        }
    }
}

struct CoreInner {
    planner: FftPlanner<f64>,
    plans: Vec<FftPlan>,
    scratch: FftScratch,
}

impl CoreInner {
    fn new(n: usize) -> Self {
        Self {
            planner: FftPlanner::new(),
            plans: Vec::new(),
            scratch: FftScratch::new(n),
        }
    }

    /// Returns the plan whose transform length is the smallest 5-smooth
    /// value `>= required_len`, creating and caching it if necessary
    /// (spec §4.3 `select_plan`).
    fn select_plan(&mut self, required_len: usize) -> FftPlan {
        let len = next_five_smooth(required_len.max(1));

        if let Some(p) = self.plans.iter().find(|p| p.len == len) {
            return p.clone();
        }

        let plan = FftPlan {
            len,
            forward: self.planner.plan_fft_forward(len),
            inverse: self.planner.plan_fft_inverse(len),
        };

        let idx = self.plans.partition_point(|p| p.len < len);
        self.plans.insert(idx, plan.clone());
        plan
    }
}

/// The process-scoped precision configuration (spec §3 `CorePrecision`).
pub struct CorePrecision {
    digits: DigitCharacteristics,
    fft_threads: usize,
    inner: Mutex<CoreInner>,
}

static CORE: OnceLock<CorePrecision> = OnceLock::new();

impl CorePrecision {
    /// Idempotent configuration entry point (spec §4.3 `configure`).
    ///
    /// The first successful call fixes the precision for the whole
    /// process; subsequent calls (even with different arguments)
    /// observe the already-configured instance, matching spec §4.3:
    /// "Concurrent callers observe the same instance."
    pub fn configure(digits10: i32, fft_threads: usize) -> Result<&'static CorePrecision, MpError> {
        if fft_threads == 0 {
            return Err(MpError::ConfigurationFailed {
                reason: "fft_threads must be >= 1".to_string(),
            });
        }

        Ok(CORE.get_or_init(|| {
            let digits = DigitCharacteristics::new(digits10);
            CorePrecision {
                digits,
                fft_threads,
                inner: Mutex::new(CoreInner::new(digits.elem_number())),
            }
        }))
    }

    /// Returns the global instance, auto-configuring with the defaults
    /// from [`limits::DEFAULT_DIGITS10`] / [`limits::DEFAULT_FFT_THREADS`]
    /// if `configure` was never called. This keeps `Real`/`Complex`
    /// usable without an explicit bootstrap step, the same way the
    /// teacher's `fibonacci_adaptive` works standalone in doctests
    /// without the caller touching `algo::parallel` directly.
    pub fn global() -> &'static CorePrecision {
        CORE.get_or_init(|| {
            let digits = DigitCharacteristics::new(limits::DEFAULT_DIGITS10);
            CorePrecision {
                digits,
                fft_threads: limits::DEFAULT_FFT_THREADS,
                inner: Mutex::new(CoreInner::new(digits.elem_number())),
            }
        })
    }

    #[inline]
    pub fn digits(&self) -> DigitCharacteristics {
        self.digits
    }

    #[inline]
    pub fn elem_number(&self) -> usize {
        self.digits.elem_number()
    }

    #[inline]
    pub fn fft_threads(&self) -> usize {
        self.fft_threads
    }

    /// Acquires exclusive access to the FFT plan cache and scratch
    /// buffers for the duration of `f`, selecting/creating the plan for
    /// `required_len` first. The lock is held across the whole closure
    /// call — spec §5: "held across the entire FFT multiply (forward,
    /// convolve, inverse, recombine)".
    pub fn with_fft_scratch<R>(
        &self,
        required_len: usize,
        f: impl FnOnce(&FftPlan, &mut FftScratch) -> R,
    ) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let plan = guard.select_plan(required_len);
        guard.scratch.prepare(plan.len);
        f(&plan, &mut guard.scratch)
    }
}

/// Returns `true` if `n` has no prime factor greater than 5.
fn is_five_smooth(mut n: usize) -> bool {
    if n == 0 {
        return false;
    }
    for p in [2usize, 3, 5] {
        while n % p == 0 {
            n /= p;
        }
    }
    n == 1
}

/// Smallest 5-smooth integer `>= n` (spec §4.6 step 2, GLOSSARY).
pub fn next_five_smooth(n: usize) -> usize {
    let mut c = n.max(1);
    while !is_five_smooth(c) {
        c += 1;
    }
    c
}

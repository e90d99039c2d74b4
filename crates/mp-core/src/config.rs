//! Configuration constants and tuning parameters for the decimal engine.
//!
//! Centralizes the crossover points and iteration caps referenced
//! throughout `mp-core`, in the same spirit as the teacher's
//! `fibrust_core::config` module: one place to tune, with the
//! justification recorded next to each constant.

/// Base of one limb: `10^8` (spec §3 "limb-mask").
pub const LIMB_BASE: u32 = 100_000_000;
/// Decimal digits represented by one limb.
pub const LIMB_DIGITS10: i32 = 8;
/// Secondary base used only by the FFT multiply digit splitting: `10^4`
/// (spec §3 "limb-half-mask").
pub const LIMB_HALF_BASE: u32 = 10_000;

/// Multiplication and FFT crossover thresholds.
pub mod thresholds {
    /// Below this many limbs of `min(prec_elem)`, schoolbook O(p^2)
    /// multiplication is used (spec §4.5.3). At or above it, FFT
    /// convolution is used. 300 limbs is ~2,400 decimal digits,
    /// matching the original `mp_elem_fft_min` crossover.
    pub const SCHOOLBOOK_LIMB_MAX: usize = 300;

    /// Minimum FFT transform length (in real-valued half-limb samples)
    /// above which the two forward transforms of an FFT multiply are
    /// dispatched to separate threads via `rayon::join` rather than run
    /// sequentially (spec §4.6 step 4, §5).
    pub const FFT_PARALLEL_MIN_LEN: usize = 8192;

    /// Hard cap on Newton/AGM iterations for any adaptive-precision
    /// kernel (spec §5 "Cancellation/timeouts": no cancellation, bound
    /// by precision schedule, exceed -> return best estimate).
    pub const MAX_ITERATIONS: usize = 64;

    /// Growth factor applied to the estimated working precision between
    /// adaptive-precision iterations. The reference implementation uses
    /// 1.9 (just under doubling) to leave headroom against an
    /// overshoot of the true quadratic convergence rate.
    pub const PRECISION_GROWTH: f64 = 1.9;

    /// Above this requested `digits10`, `exp` switches from direct
    /// Taylor summation (linear convergence cost in the number of
    /// terms, each a full-precision multiply) to Newton iteration
    /// against `log` (quadratic convergence, `log` itself backed by the
    /// quasi-linear AGM) (spec §4.7 `exp`: "two precision regimes").
    pub const EXP_TAYLOR_DIGITS10_MAX: i32 = 2_000;

    /// Hard cap on Taylor series terms for `exp`/trig series kernels,
    /// comfortably above the ~1000 terms needed at
    /// [`EXP_TAYLOR_DIGITS10_MAX`].
    pub const MAX_TAYLOR_TERMS: usize = 10_000;

    /// Highest Bernoulli number index served directly from the
    /// recurrence table (spec §4.7 `bernoulli`). `C(61, 30)` is the
    /// largest binomial coefficient touched at this bound, comfortably
    /// inside `u64`.
    pub const BERNOULLI_MAX_INDEX: usize = 60;

    /// Terms used by the Stirling asymptotic series for `gamma`/`lgamma`
    /// before falling back to the recurrence-shifted argument.
    pub const GAMMA_STIRLING_TERMS: usize = 8;

    /// Terms used by the Bessel function's power series before the
    /// asymptotic regime would be needed (kept well within the series'
    /// radius of convergence for moderate arguments).
    pub const BESSEL_SERIES_TERMS: usize = 200;
}

/// Memory and safety limits.
pub mod limits {
    /// Minimum accepted `digits10`; lower requests are clamped up to
    /// this (spec §4.2).
    pub const MIN_DIGITS10: i32 = 6;

    /// `digits10_tol` margin is clamped into `[16, 32]` (spec §3).
    pub const DIGITS10_EXTRA_MIN: i32 = 16;
    pub const DIGITS10_EXTRA_MAX: i32 = 32;

    /// Default digits10 used when a driver does not override it via
    /// `-dN` (spec §6.1).
    pub const DEFAULT_DIGITS10: i32 = 1_000_000;

    /// Default FFT worker-thread count (spec §6.1).
    pub const DEFAULT_FFT_THREADS: usize = 4;
}

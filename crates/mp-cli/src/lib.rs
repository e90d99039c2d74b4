//! Shared CLI scaffolding for the five driver binaries (spec §6.1).
//!
//! Each binary is a thin wrapper: parse [`CommonArgs`], configure
//! [`mp_core::CorePrecision`] once, run one kernel, print the result via
//! `Real::write_string`. `indicatif` reports progress for the iterative
//! kernels the same way the teacher's CLI reports Fibonacci batch
//! progress.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mp_core::CorePrecision;

/// Arguments common to every driver binary.
#[derive(Parser, Debug)]
pub struct CommonArgs {
    /// Requested significant decimal digits.
    #[arg(short = 'd', long, default_value_t = mp_core::config::limits::DEFAULT_DIGITS10)]
    pub digits10: i32,

    /// FFT worker-thread count.
    #[arg(short = 't', long, default_value_t = mp_core::config::limits::DEFAULT_FFT_THREADS)]
    pub threads: usize,
}

/// Configures the process-wide precision from `args`, returning the
/// configured singleton (spec §4.3 `configure`: idempotent, first call
/// wins).
pub fn init_precision(args: &CommonArgs) -> anyhow::Result<&'static CorePrecision> {
    CorePrecision::configure(args.digits10, args.threads)
        .map_err(|e| anyhow::anyhow!("{e}"))
}

/// A spinner for the iterative kernels, silent once the value is ready.
pub fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    bar.set_message(message);
    bar.enable_steady_tick(std::time::Duration::from_millis(80));
    bar
}

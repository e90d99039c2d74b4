//! `mp-core`: arbitrary-precision decimal significand, FFT
//! multiplication, and the real/complex transcendental function
//! kernels built on top of it.
//!
//! Module layout mirrors the dependency order the kernels actually
//! need: [`limb`] and [`base_num`] are the storage/loop primitives,
//! [`digits`] and [`precision`] derive and cache the per-process
//! precision configuration, [`real`] and [`fft`] give the justified
//! decimal value type and its multiplication paths, [`detail`] hosts
//! the shared AGM/convergence plumbing, and [`kernels`]/[`complex`]
//! build the public function surface on top of all of it.

pub mod base_num;
pub mod complex;
pub mod config;
pub mod detail;
pub mod digits;
pub mod error;
pub mod fft;
pub mod kernels;
pub mod limb;
pub mod precision;
pub mod real;

pub use complex::Complex;
pub use error::{MpError, MpResult};
pub use precision::CorePrecision;
pub use real::Real;

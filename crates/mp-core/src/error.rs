//! Error taxonomy for `mp-core` (spec §7).
//!
//! Only configuration and I/O failures are surfaced as `Result` errors.
//! Domain and range conditions never produce an `Err` — they are encoded
//! as `FpClass::Nan` / `FpClass::Inf` sentinel values on the affected
//! `Real`/`Complex` and propagate through further arithmetic (§7
//! "Propagation policy").

use std::fmt::{self, Display};

/// Errors that can escape the core to a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MpError {
    /// A decimal string did not match the parse grammar, or the parsed
    /// exponent was not a multiple of 8.
    ParseError { input: String, reason: String },
    /// Backing buffer acquisition failed.
    AllocationFailed { requested_limbs: usize },
    /// The FFT plan list could not be constructed for the requested
    /// precision (e.g. `digits10` not representable, or `configure`
    /// called twice with incompatible arguments).
    ConfigurationFailed { reason: String },
}

impl Display for MpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpError::ParseError { input, reason } => {
                write!(f, "failed to parse '{}' as a decimal: {}", input, reason)
            }
            MpError::AllocationFailed { requested_limbs } => {
                write!(f, "failed to allocate a limb array of {} limbs", requested_limbs)
            }
            MpError::ConfigurationFailed { reason } => {
                write!(f, "core precision configuration failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for MpError {}

pub type MpResult<T> = Result<T, MpError>;

//! Property correlation errors.

use thiserror::Error;
use wf_core::WfError;

/// Result type for property correlation calls.
pub type PvtResult<T> = Result<T, PvtError>;

/// Errors that can occur while evaluating fluid property correlations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PvtError {
    /// Non-physical input (negative density, negative gas-oil ratio, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Input outside the validity range of a correlation.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Iterative correlation (Z-factor) did not converge.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}

impl From<PvtError> for WfError {
    fn from(err: PvtError) -> Self {
        match err {
            PvtError::NonPhysical { what } => WfError::Invariant { what },
            PvtError::OutOfRange { what } => WfError::InvalidArg { what },
            PvtError::InvalidArg { what } => WfError::InvalidArg { what },
            PvtError::ConvergenceFailed { what } => WfError::Invariant { what },
        }
    }
}

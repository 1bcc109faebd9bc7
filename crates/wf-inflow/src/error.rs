//! Error types for the inflow solvers.

use thiserror::Error;
use wf_core::WfError;
use wf_pvt::PvtError;

/// Errors that can occur while solving radial inflow.
#[derive(Error, Debug)]
pub enum InflowError {
    /// A solver precondition was violated (wrong phase rates, bad geometry).
    #[error("Invalid usage: {what}")]
    InvalidUsage { what: &'static str },

    /// The inputs describe a physically infeasible state.
    #[error("Physically infeasible: {what}")]
    Domain { what: String },

    /// The gas fixed-point iteration exceeded its pass cap; the last iterate
    /// is kept for diagnostics.
    #[error("Fixed-point iteration exceeded {passes} passes (last iterate {last_pa} Pa)")]
    Convergence { passes: usize, last_pa: f64 },

    /// The radial ODE integration failed or produced a non-finite derivative.
    #[error("Radial integration failed: {message}")]
    Integration { message: String },

    /// A property correlation rejected its inputs.
    #[error("Property correlation error: {0}")]
    Pvt(#[from] PvtError),
}

pub type InflowResult<T> = Result<T, InflowError>;

// Numeric blowups caught by the wf-core finiteness helpers surface as domain
// errors: the inputs described a state the formulas cannot represent.
impl From<WfError> for InflowError {
    fn from(err: WfError) -> Self {
        InflowError::Domain {
            what: err.to_string(),
        }
    }
}

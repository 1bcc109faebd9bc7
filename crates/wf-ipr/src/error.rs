use std::error::Error;
use std::fmt;

use wf_inflow::InflowError;

/// Errors from IPR curve generation.
#[derive(Debug)]
pub enum IprError {
    /// The sweep definition or reservoir description is unusable.
    InvalidSweep(String),
    /// A solver failed at a sweep step for a reason other than physical
    /// infeasibility.
    Solver { step: usize, source: InflowError },
}

impl fmt::Display for IprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IprError::InvalidSweep(what) => write!(f, "Invalid IPR sweep: {what}"),
            IprError::Solver { step, source } => {
                write!(f, "Inflow solver failed at sweep step {step}: {source}")
            }
        }
    }
}

impl Error for IprError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IprError::Solver { source, .. } => Some(source),
            IprError::InvalidSweep(_) => None,
        }
    }
}

//! wf-inflow: radial inflow solvers for a single vertical well draining a
//! cylindrical reservoir.
//!
//! Provides:
//! - [`ReservoirConfig`] and the flow-regime/boundary/direction selectors
//! - [`SurfaceRates`] / [`StandardDensities`] input records
//! - the closed-form single-phase oil solver ([`solve_oil`])
//! - the fixed-point single-phase gas solver ([`solve_gas`])
//! - the ODE-based general/multiphase solver ([`solve_general`])
//!
//! All solvers are pure functions of their inputs: boundary pressure in,
//! outlet pressure, a radial [`PressureProfile`] and (for the single-phase
//! solvers) a productivity index out. The public boundary is strict SI.

pub mod config;
pub mod error;
pub mod gas;
pub mod general;
pub mod oil;
pub mod profile;
pub mod rates;

// Re-exports for ergonomics
pub use config::{Fluid, FlowDirection, FlowRegime, PressureAnchor, ReservoirConfig};
pub use error::{InflowError, InflowResult};
pub use gas::solve_gas;
pub use general::solve_general;
pub use oil::solve_oil;
pub use profile::{PROFILE_SAMPLES, PressureProfile, SolverResult};
pub use rates::{StandardDensities, SurfaceRates};

//! wf-pvt: pressure/volume/temperature property correlations for wellflow.
//!
//! Provides:
//! - Bubble-point pressure correlations (Standing, Glaso, tabulated volatile oil)
//! - Solution gas-oil ratio (Standing, inverted)
//! - Oil, gas and water viscosity correlations
//! - Sutton pseudo-critical properties and the Dranchuk–Abou-Kassem Z-factor
//! - Gas formation volume factor
//! - Corey-type relative permeability
//!
//! # Architecture
//!
//! Everything here is a pure function of (pressure, composition, temperature) plus
//! the owned, immutable [`VolatileOilTable`]. The public boundary is strict SI
//! (Pa, kg/m³, m³/m³, °C); the oilfield units the empirical fits were published in
//! (psi, °F, °API, scf/bbl) are private conversion details.
//!
//! # Example
//!
//! ```
//! use wf_pvt::bubble_point_standing;
//!
//! let p_b = bubble_point_standing(200.0, 0.95, 850.0, 60.0).unwrap();
//! assert!(p_b > 1.0e5);
//! ```

pub mod bubble_point;
pub mod error;
pub mod gas;
pub mod relperm;
mod transforms;
pub mod viscosity;
pub mod volatile_oil;

// Re-exports for ergonomics
pub use bubble_point::{
    OilModel, bubble_point, bubble_point_glaso, bubble_point_standing, solution_gor_standing,
};
pub use error::{PvtError, PvtResult};
pub use gas::{
    gas_fvf, pseudo_critical_pressure_sutton, pseudo_critical_temperature_sutton, z_factor_dak,
};
pub use relperm::RelPermParams;
pub use viscosity::{gas_viscosity, oil_viscosity, water_viscosity};
pub use volatile_oil::{PvtSample, TemperatureRow, VolatileOilTable};

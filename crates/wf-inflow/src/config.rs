//! Reservoir geometry, flow-regime selectors and fluid descriptions.

use wf_core::units::{Area, Length, Temperature};
use wf_pvt::{OilModel, RelPermParams};

use crate::error::{InflowError, InflowResult};

/// Time behavior of the drainage-area pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// Constant-pressure outer boundary.
    Steady,
    /// Closed outer boundary, uniformly depleting.
    PseudoSteady,
}

/// Which reservoir pressure the far-field boundary condition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureAnchor {
    /// Pressure at the external radius.
    Boundary,
    /// Volume-averaged pressure over the drainage area.
    Average,
}

/// Direction the solution marches in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// Inlet pressure given at the wellbore, solve outward to the boundary.
    WellboreToBoundary,
    /// Inlet pressure given at the boundary, solve inward to the wellbore.
    BoundaryToWellbore,
}

impl FlowDirection {
    /// Start and end radii [m] of the march.
    pub(crate) fn endpoints(&self, config: &ReservoirConfig) -> (f64, f64) {
        let (r_w, r_e) = (config.r_w.value, config.r_e.value);
        match self {
            FlowDirection::WellboreToBoundary => (r_w, r_e),
            FlowDirection::BoundaryToWellbore => (r_e, r_w),
        }
    }
}

/// Static description of the drainage area around a single vertical well.
#[derive(Debug, Clone)]
pub struct ReservoirConfig {
    /// Net reservoir thickness.
    pub h: Length,
    /// Absolute permeability.
    pub permeability: Area,
    /// Wellbore radius.
    pub r_w: Length,
    /// External (drainage) radius.
    pub r_e: Length,
    /// Uniform reservoir temperature.
    pub temperature: Temperature,
    /// Dimensionless skin factor.
    pub skin: f64,
    /// Forchheimer inertial coefficient [1/m]; zero disables the
    /// non-Darcy term.
    pub forchheimer_beta: f64,
    pub regime: FlowRegime,
    pub anchor: PressureAnchor,
}

impl ReservoirConfig {
    pub fn validate(&self) -> InflowResult<()> {
        if !(self.h.value > 0.0) {
            return Err(InflowError::InvalidUsage {
                what: "reservoir thickness must be positive",
            });
        }
        if !(self.permeability.value > 0.0) {
            return Err(InflowError::InvalidUsage {
                what: "permeability must be positive",
            });
        }
        if !(self.r_w.value > 0.0) || !(self.r_e.value > self.r_w.value) {
            return Err(InflowError::InvalidUsage {
                what: "radii must satisfy 0 < r_w < r_e",
            });
        }
        if !self.skin.is_finite() {
            return Err(InflowError::InvalidUsage {
                what: "skin factor must be finite",
            });
        }
        if !self.forchheimer_beta.is_finite() || self.forchheimer_beta < 0.0 {
            return Err(InflowError::InvalidUsage {
                what: "Forchheimer coefficient must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Geometry correction subtracted from ln(r_e/r_w) in the radial
    /// drawdown equations.
    pub fn geometry_factor(&self) -> f64 {
        match (self.regime, self.anchor) {
            (FlowRegime::Steady, PressureAnchor::Boundary) => 0.0,
            (FlowRegime::Steady, PressureAnchor::Average) => 0.5,
            (FlowRegime::PseudoSteady, PressureAnchor::Boundary) => 0.5,
            (FlowRegime::PseudoSteady, PressureAnchor::Average) => 0.75,
        }
    }

    pub(crate) fn t_c(&self) -> f64 {
        self.temperature.value - 273.15
    }
}

/// What flows: which solver applies and which property model closes it.
#[derive(Debug, Clone)]
pub enum Fluid {
    /// Undersaturated oil with dissolved gas; closed-form solver.
    Oil { model: OilModel },
    /// Dry gas; fixed-point solver on the p² formulation.
    Gas,
    /// Oil, water and free gas flowing together; ODE solver with
    /// rel-perm mobilities.
    Multiphase {
        model: OilModel,
        relperm: RelPermParams,
    },
}

//! Sweep definition and the resulting curve.

use wf_core::units::{Pressure, VolumeRate};
use wf_inflow::{Fluid, SurfaceRates};

use crate::error::IprError;

/// Definition of one IPR sweep.
///
/// The swept rate is the oil rate for oil and multiphase wells and the gas
/// rate for gas wells; companion phases follow through `gas_oil_ratio` and
/// `water_cut`. Rates are negative for production, so `max_rate` is the most
/// negative point of the sweep.
#[derive(Debug, Clone)]
pub struct IprSweep {
    /// Reservoir (boundary or average, per the reservoir config) pressure the
    /// whole sweep is anchored to.
    pub reservoir_pressure: Pressure,
    /// Largest production rate to reach, in m³/s at standard conditions.
    pub max_rate: VolumeRate,
    /// Number of equally spaced rate steps between zero (exclusive) and
    /// `max_rate` (inclusive).
    pub points: usize,
    /// Produced gas per produced oil [m³/m³]; ignored for gas wells.
    pub gas_oil_ratio: f64,
    /// Water fraction of the produced liquid, in [0, 1); ignored for gas
    /// wells.
    pub water_cut: f64,
}

impl IprSweep {
    pub fn validate(&self) -> Result<(), IprError> {
        if self.points == 0 {
            return Err(IprError::InvalidSweep(
                "sweep needs at least one rate step".into(),
            ));
        }
        let q = self.max_rate.value;
        if !q.is_finite() || q >= 0.0 {
            return Err(IprError::InvalidSweep(format!(
                "swept rate must be a finite production (negative) rate, got {q}"
            )));
        }
        if !(self.reservoir_pressure.value > 0.0) {
            return Err(IprError::InvalidSweep(
                "reservoir pressure must be positive".into(),
            ));
        }
        if !self.gas_oil_ratio.is_finite() || self.gas_oil_ratio < 0.0 {
            return Err(IprError::InvalidSweep(
                "gas-oil ratio must be finite and non-negative".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.water_cut) {
            return Err(IprError::InvalidSweep(
                "water cut must lie in [0, 1)".into(),
            ));
        }
        Ok(())
    }

    /// Full three-phase rate vector for one swept rate.
    pub(crate) fn rates_for(&self, fluid: &Fluid, q: f64) -> SurfaceRates {
        match fluid {
            Fluid::Gas => SurfaceRates::new(q, 0.0, 0.0),
            Fluid::Oil { .. } | Fluid::Multiphase { .. } => {
                let q_w = if self.water_cut > 0.0 {
                    q * self.water_cut / (1.0 - self.water_cut)
                } else {
                    0.0
                };
                SurfaceRates::new(q * self.gas_oil_ratio, q, q_w)
            }
        }
    }
}

/// One solved operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IprPoint {
    /// Swept surface rate [m³/s], negative for production.
    pub rate_m3s: f64,
    /// Flowing wellbore pressure [Pa].
    pub pressure_pa: f64,
}

/// Inflow performance curve: operating points ordered by increasing rate
/// magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct IprCurve {
    pub(crate) points: Vec<IprPoint>,
    pub(crate) truncated: bool,
}

impl IprCurve {
    pub fn points(&self) -> &[IprPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the sweep stopped early because the reservoir could not
    /// sustain the next operating point.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Absolute open flow potential: the largest solved rate magnitude, if
    /// any point was solved.
    pub fn max_rate_magnitude(&self) -> Option<f64> {
        self.points.last().map(|pt| pt.rate_m3s.abs())
    }
}

//! Solver output types.

use wf_core::units::Pressure;

/// Number of samples in the closed-form solvers' radial profiles.
pub const PROFILE_SAMPLES: usize = 100;

/// Pressure sampled along the radius, ordered in the direction the solver
/// marched (wellbore-out or boundary-in).
#[derive(Debug, Clone, PartialEq)]
pub struct PressureProfile {
    radii_m: Vec<f64>,
    pressures_pa: Vec<f64>,
}

impl PressureProfile {
    pub(crate) fn new(radii_m: Vec<f64>, pressures_pa: Vec<f64>) -> Self {
        debug_assert_eq!(radii_m.len(), pressures_pa.len());
        Self {
            radii_m,
            pressures_pa,
        }
    }

    pub fn radii_m(&self) -> &[f64] {
        &self.radii_m
    }

    pub fn pressures_pa(&self) -> &[f64] {
        &self.pressures_pa
    }

    pub fn len(&self) -> usize {
        self.radii_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii_m.is_empty()
    }

    /// `(radius, pressure)` pairs in march order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.radii_m
            .iter()
            .copied()
            .zip(self.pressures_pa.iter().copied())
    }
}

/// What every inflow solver returns.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Pressure at the end of the march (boundary for outward runs, wellbore
    /// for inward runs).
    pub outlet_pressure: Pressure,
    /// Radial pressure profile from wellbore to boundary (or the reverse).
    pub profile: PressureProfile,
    /// Productivity index [m³/(s·Pa)], when the formulation defines one.
    pub productivity_index: Option<f64>,
}

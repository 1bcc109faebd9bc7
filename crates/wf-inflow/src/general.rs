//! General radial inflow by numerical integration.
//!
//! Darcy's law in radial coordinates, `dp/dr = -u_t / (k·λ_t)`, integrated
//! with an adaptive Runge-Kutta-Fehlberg scheme. Properties are evaluated at
//! the local pressure at every step, so this solver handles the cases the
//! closed forms cannot: free gas evolving below the bubble point, three-phase
//! mobility, and non-Darcy (Forchheimer) flow near the wellbore.
//!
//! The march is parameterized by arc length `s ∈ [0, |r_out - r_in|]` so the
//! integrator always runs forward regardless of flow direction.

use std::f64::consts::PI;

use peroxide::fuga::*;
use tracing::debug;
use wf_core::ensure_finite;
use wf_core::units::{Pressure, pa};
use wf_pvt::{
    OilModel, PvtError, PvtResult, gas_fvf, gas_viscosity, oil_viscosity,
    pseudo_critical_pressure_sutton, pseudo_critical_temperature_sutton, solution_gor_standing,
    water_viscosity, z_factor_dak,
};

use crate::config::{Fluid, FlowDirection, ReservoirConfig};
use crate::error::{InflowError, InflowResult};
use crate::profile::{PressureProfile, SolverResult};
use crate::rates::{StandardDensities, SurfaceRates};

/// Integrator tolerance [Pa] per step.
const ODE_TOL_PA: f64 = 10.0;
const ODE_SAFETY: f64 = 0.9;
const ODE_MAX_STEP_ITER: usize = 100;

/// Dissolved gas-oil ratio [m³/m³] at local conditions: the tabulated curve
/// for volatile oil, the inverted Standing correlation otherwise.
fn dissolved_gor(model: &OilModel, p_pa: f64, rho_g: f64, rho_o: f64, t_c: f64) -> PvtResult<f64> {
    match model {
        OilModel::VolatileOil(table) => table.solution_gor(p_pa, t_c),
        OilModel::Standing | OilModel::Glaso => solution_gor_standing(p_pa, rho_g, rho_o, t_c),
    }
}

struct RadialDarcy<'a> {
    config: &'a ReservoirConfig,
    fluid: &'a Fluid,
    q_g: f64,
    q_o: f64,
    q_w: f64,
    rho_g: f64,
    rho_o: f64,
    /// Total producing gas-oil ratio; dissolved gas cannot exceed it.
    r_go: f64,
    t_c: f64,
    r_in: f64,
    dir: f64,
    p0: f64,
}

impl RadialDarcy<'_> {
    fn darcy_area(&self, r: f64) -> f64 {
        2.0 * PI * r * self.config.h.value
    }

    fn local_gas_fvf(&self, p: f64) -> PvtResult<f64> {
        let p_pc = pseudo_critical_pressure_sutton(self.rho_g)?;
        let t_pc = pseudo_critical_temperature_sutton(self.rho_g)?;
        let z = z_factor_dak(p / p_pc, (self.t_c + 273.15) / t_pc)?;
        gas_fvf(p, self.t_c, z)
    }

    /// dp/dr [Pa/m] at radius `r` and pressure `p`.
    fn pressure_gradient(&self, r: f64, p: f64) -> PvtResult<f64> {
        let k = self.config.permeability.value;
        let area = self.darcy_area(r);

        match self.fluid {
            Fluid::Oil { .. } => {
                let mu = oil_viscosity(p, self.r_go, self.rho_g, self.rho_o, self.t_c)?;
                Ok(-mu * self.q_o / (area * k))
            }
            Fluid::Gas => {
                let b_g = self.local_gas_fvf(p)?;
                let mu = gas_viscosity(p, self.rho_g, self.t_c)?;
                let u_g = self.q_g * b_g / area;
                let darcy = -mu * u_g / k;
                let forchheimer =
                    -self.config.forchheimer_beta * (self.rho_g / b_g) * u_g * u_g.abs();
                Ok(darcy + forchheimer)
            }
            Fluid::Multiphase { model, relperm } => {
                let rs =
                    dissolved_gor(model, p, self.rho_g, self.rho_o, self.t_c)?.min(self.r_go.max(0.0));

                // gas the oil cannot hold flows free; clamp to the producing
                // sign so dissolved gas never turns into injection
                let mut q_g_free = self.q_g - rs * self.q_o;
                if q_g_free > 0.0 {
                    q_g_free = 0.0;
                }
                let mut b_g = 1.0;
                let mut q_g_loc = 0.0;
                if q_g_free != 0.0 {
                    b_g = self.local_gas_fvf(p)?;
                    q_g_loc = q_g_free * b_g;
                }

                // oil and water are treated incompressible; no-slip fractional
                // flow maps local rates onto saturations
                let q_total = self.q_o + self.q_w + q_g_loc;
                let q_abs = self.q_o.abs() + self.q_w.abs() + q_g_loc.abs();
                if q_abs == 0.0 {
                    return Ok(0.0);
                }
                let f_w = self.q_w.abs() / q_abs;
                let f_g = q_g_loc.abs() / q_abs;
                let s_w = relperm.s_wi + f_w * (1.0 - relperm.s_wi);
                let s_g = f_g * (1.0 - relperm.s_wi);

                let mut mobility = 0.0;
                if self.q_o != 0.0 {
                    let kr_o = relperm.kr_oil(s_w, s_g);
                    if kr_o > 0.0 {
                        mobility += kr_o / oil_viscosity(p, rs, self.rho_g, self.rho_o, self.t_c)?;
                    }
                }
                if self.q_w != 0.0 {
                    let kr_w = relperm.kr_water(s_w);
                    if kr_w > 0.0 {
                        mobility += kr_w / water_viscosity(self.t_c);
                    }
                }
                let mut forchheimer = 0.0;
                if q_g_loc != 0.0 {
                    let kr_g = relperm.kr_gas(s_g);
                    if kr_g > 0.0 {
                        mobility += kr_g / gas_viscosity(p, self.rho_g, self.t_c)?;
                    }
                    if self.config.forchheimer_beta > 0.0 {
                        let u_g = q_g_loc / area;
                        forchheimer =
                            -self.config.forchheimer_beta * (self.rho_g / b_g) * u_g * u_g.abs();
                    }
                }
                if mobility <= 0.0 {
                    return Err(PvtError::NonPhysical {
                        what: "total phase mobility",
                    });
                }

                Ok(-q_total / (area * k * mobility) + forchheimer)
            }
        }
    }
}

impl ODEProblem for RadialDarcy<'_> {
    fn rhs(&self, s: f64, y: &[f64], dy: &mut [f64]) -> anyhow::Result<()> {
        let p = y[0];
        let r = self.r_in + self.dir * s;
        if !p.is_finite() || p <= 0.0 {
            anyhow::bail!("non-physical pressure {p} Pa at radius {r:.3} m");
        }
        let dpdr = self.pressure_gradient(r, p).map_err(anyhow::Error::from)?;
        if !dpdr.is_finite() {
            anyhow::bail!("non-finite pressure gradient at radius {r:.3} m");
        }
        dy[0] = self.dir * dpdr;
        Ok(())
    }
}

/// Solve radial inflow for any [`Fluid`] by integrating Darcy's law.
///
/// No productivity index is reported: the general formulation has no single
/// anchored reservoir pressure to define one against.
pub fn solve_general(
    config: &ReservoirConfig,
    fluid: &Fluid,
    inlet_pressure: Pressure,
    rates: &SurfaceRates,
    densities: &StandardDensities,
    direction: FlowDirection,
) -> InflowResult<SolverResult> {
    config.validate()?;
    match fluid {
        Fluid::Oil { .. } => rates.require_oil_well()?,
        Fluid::Gas => rates.require_gas_well()?,
        Fluid::Multiphase { relperm, .. } => {
            rates.require_finite()?;
            relperm.validate()?;
        }
    }
    let p_in = inlet_pressure.value;
    if !(p_in > 0.0) {
        return Err(InflowError::InvalidUsage {
            what: "inlet pressure must be positive",
        });
    }

    let (r_in, r_out) = direction.endpoints(config);
    let span = (r_out - r_in).abs();
    let problem = RadialDarcy {
        config,
        fluid,
        q_g: rates.gas.value,
        q_o: rates.oil.value,
        q_w: rates.water.value,
        rho_g: densities.gas.value,
        rho_o: densities.oil.value,
        r_go: rates.gas_oil_ratio(),
        t_c: config.t_c(),
        r_in,
        dir: (r_out - r_in).signum(),
        p0: p_in,
    };

    let solver = BasicODESolver::new(RKF45::new(
        ODE_TOL_PA,
        ODE_SAFETY,
        1e-6,
        span / 4.0,
        ODE_MAX_STEP_ITER,
    ));
    let (s_vec, y_vec) = solver
        .solve(&problem, (0.0, span), span / 200.0, &[problem.p0])
        .map_err(|e| InflowError::Integration {
            message: format!("{e:#}"),
        })?;

    let radii: Vec<f64> = s_vec.iter().map(|&s| r_in + problem.dir * s).collect();
    let pressures: Vec<f64> = y_vec.iter().map(|y| y[0]).collect();
    let p_out = pressures.last().copied().ok_or_else(|| InflowError::Integration {
        message: "integrator produced no samples".into(),
    })?;
    ensure_finite(p_out, "outlet pressure")?;
    debug!(p_in, p_out, steps = radii.len(), "radial integration finished");

    Ok(SolverResult {
        outlet_pressure: pa(p_out),
        profile: PressureProfile::new(radii, pressures),
        productivity_index: None,
    })
}

//! Fixed-point radial inflow for dry gas.
//!
//! Gas properties vary strongly with pressure, so the semi-steady-state
//! drawdown is written on p² with µ·B evaluated at the average reservoir
//! pressure, and the coupled (p_wf, p_R, p_R_av) triple is relaxed to a
//! fixed point with under-damping.

use std::f64::consts::PI;

use tracing::{debug, trace};
use wf_core::units::{Pressure, pa};
use wf_core::{Tolerances, ensure_finite, linspace};
use wf_pvt::{
    gas_fvf, gas_viscosity, pseudo_critical_pressure_sutton, pseudo_critical_temperature_sutton,
    z_factor_dak,
};

use crate::config::{FlowDirection, PressureAnchor, ReservoirConfig};
use crate::error::{InflowError, InflowResult};
use crate::profile::{PROFILE_SAMPLES, PressureProfile, SolverResult};
use crate::rates::{StandardDensities, SurfaceRates};

const DAMPING: f64 = 0.5;
const TOL: Tolerances = Tolerances {
    abs: 1.0e2,
    rel: 1.0e-3,
};
const MAX_PASSES: usize = 1000;

/// Converged pressure triple of the gas fixed point.
#[derive(Debug)]
struct FixedPoint {
    p_wf: f64,
    p_r: f64,
    p_r_av: f64,
}

/// Relax (p_wf, p_R, p_R,av) until the anchored unknown settles, or fail with
/// the last iterate once the pass cap is spent.
fn relax_pressures(
    config: &ReservoirConfig,
    direction: FlowDirection,
    p_in: f64,
    q_g: f64,
    rho_g: f64,
    max_passes: usize,
) -> InflowResult<FixedPoint> {
    let t_c = config.t_c();
    let t_abs = t_c + 273.15;
    let p_pc = pseudo_critical_pressure_sutton(rho_g)?;
    let t_pc = pseudo_critical_temperature_sutton(rho_g)?;

    let (r_w, r_e) = (config.r_w.value, config.r_e.value);
    let k = config.permeability.value;
    let h = config.h.value;
    let geom = (r_e / r_w).ln() - config.geometry_factor() + config.skin;

    // all three pressures start at the inlet and relax together
    let mut p_wf = p_in;
    let mut p_r = p_in;
    let mut p_r_av = p_in;

    for pass in 1..=max_passes {
        let p_r_old = p_r;
        let p_r_av_old = p_r_av;

        let z_av = z_factor_dak(p_r_av / p_pc, t_abs / t_pc)?;
        let b_g_av = gas_fvf(p_r_av, t_c, z_av)?;
        let mu_av = gas_viscosity(p_r_av, rho_g, t_c)?;
        let mu_b_q = mu_av * b_g_av * q_g;

        // p² drawdown and the pseudo-steady p_R / p_R_av offset
        let help = mu_b_q * geom / (PI * k * h);
        let pss = mu_b_q / (4.0 * PI * k * h);

        match (direction, config.anchor) {
            (FlowDirection::WellboreToBoundary, PressureAnchor::Average) => {
                p_r_av = (p_wf * p_wf - help * p_r_av).abs().sqrt();
                let p_r_new = p_r_av - pss;
                p_r = DAMPING * p_r_old + (1.0 - DAMPING) * p_r_new;
            }
            (FlowDirection::WellboreToBoundary, PressureAnchor::Boundary) => {
                p_r = (p_wf * p_wf - help * p_r_av).abs().sqrt();
                let p_r_av_new = p_r + pss;
                p_r_av = DAMPING * p_r_av_old + (1.0 - DAMPING) * p_r_av_new;
            }
            (FlowDirection::BoundaryToWellbore, PressureAnchor::Average) => {
                p_wf = (p_r_av * p_r_av + help * p_r_av).abs().sqrt();
                let p_r_new = p_wf + (p_r_av - p_wf) * 1.5;
                p_r = DAMPING * p_r_old + (1.0 - DAMPING) * p_r_new;
            }
            (FlowDirection::BoundaryToWellbore, PressureAnchor::Boundary) => {
                p_wf = (p_r * p_r + help * p_r_av).abs().sqrt();
                let p_r_av_new = p_wf + (p_r - p_wf) * 2.0 / 3.0;
                p_r_av = DAMPING * p_r_av_old + (1.0 - DAMPING) * p_r_av_new;
            }
        }

        ensure_finite(p_r, "boundary pressure iterate")?;
        ensure_finite(p_r_av, "average pressure iterate")?;

        // the relaxed unknown decides convergence
        let (diff, old) = match config.anchor {
            PressureAnchor::Average => (p_r - p_r_old, p_r_old),
            PressureAnchor::Boundary => (p_r_av - p_r_av_old, p_r_av_old),
        };
        trace!(pass, p_wf, p_r, p_r_av, diff, "gas fixed-point pass");
        if diff.abs() <= TOL.abs && (diff / old).abs() <= TOL.rel {
            debug!(pass, p_wf, p_r, p_r_av, "gas fixed point converged");
            return Ok(FixedPoint { p_wf, p_r, p_r_av });
        }
    }

    let last_pa = match config.anchor {
        PressureAnchor::Average => p_r,
        PressureAnchor::Boundary => p_r_av,
    };
    Err(InflowError::Convergence {
        passes: max_passes,
        last_pa,
    })
}

/// Solve the radial inflow equation for a gas well.
///
/// The result's productivity index is the pseudo-PI
/// `-q_g,sc / (p_R,av - p_wf)`.
pub fn solve_gas(
    config: &ReservoirConfig,
    inlet_pressure: Pressure,
    rates: &SurfaceRates,
    densities: &StandardDensities,
    direction: FlowDirection,
) -> InflowResult<SolverResult> {
    config.validate()?;
    rates.require_gas_well()?;

    let q_g = rates.gas.value;
    let rho_g = densities.gas.value;
    let p_in = inlet_pressure.value;
    if !(p_in > 0.0) {
        return Err(InflowError::InvalidUsage {
            what: "inlet pressure must be positive",
        });
    }

    let fp = relax_pressures(config, direction, p_in, q_g, rho_g, MAX_PASSES)?;
    let FixedPoint { p_wf, p_r, p_r_av } = fp;

    let p_out = match direction {
        FlowDirection::WellboreToBoundary => match config.anchor {
            PressureAnchor::Average => p_r_av,
            PressureAnchor::Boundary => p_r,
        },
        FlowDirection::BoundaryToWellbore => p_wf,
    };

    // p² is log-linear in radius between the wellbore and the boundary
    let (r_w, r_e) = (config.r_w.value, config.r_e.value);
    let log_span = (r_e / r_w).ln();
    let radii = linspace(r_w, r_e, PROFILE_SAMPLES);
    let p_wf_sq = p_wf * p_wf;
    let p_r_sq = p_r * p_r;
    let pressures = radii
        .iter()
        .map(|&r| (p_wf_sq + (p_r_sq - p_wf_sq) * (r / r_w).ln() / log_span).sqrt())
        .collect();

    let productivity_index = if p_r_av != p_wf {
        Some(-q_g / (p_r_av - p_wf))
    } else {
        None
    };

    Ok(SolverResult {
        outlet_pressure: pa(p_out),
        profile: PressureProfile::new(radii, pressures),
        productivity_index,
    })
}

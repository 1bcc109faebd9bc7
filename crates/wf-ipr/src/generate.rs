//! Parallel IPR sweep evaluation.

use rayon::prelude::*;
use tracing::{debug, info};
use wf_core::units::constants::P_ATM_PA;
use wf_inflow::{
    Fluid, FlowDirection, InflowError, InflowResult, ReservoirConfig, SolverResult,
    StandardDensities, solve_gas, solve_general, solve_oil,
};

use crate::error::IprError;
use crate::sweep::{IprCurve, IprPoint, IprSweep};

/// Generate an IPR curve by sweeping the production rate.
///
/// Every step solves boundary-in: the reservoir pressure is held at
/// `sweep.reservoir_pressure` and the flowing wellbore pressure is recorded.
/// Steps are evaluated in parallel and folded back in rate order. The curve
/// is truncated (not failed) at the first step whose wellbore pressure falls
/// below atmospheric or that the solver rejects as physically infeasible;
/// any other solver error aborts the sweep.
pub fn generate_ipr(
    config: &ReservoirConfig,
    fluid: &Fluid,
    densities: &StandardDensities,
    sweep: &IprSweep,
) -> Result<IprCurve, IprError> {
    sweep.validate()?;
    config
        .validate()
        .map_err(|e| IprError::InvalidSweep(e.to_string()))?;

    let n = sweep.points;
    let rate_step = sweep.max_rate.value / n as f64;
    let p_res = sweep.reservoir_pressure;

    let evaluations: Vec<(f64, InflowResult<SolverResult>)> = (1..=n)
        .into_par_iter()
        .map(|i| {
            let q = i as f64 * rate_step;
            let rates = sweep.rates_for(fluid, q);
            let solved = match fluid {
                Fluid::Oil { model } => solve_oil(
                    config,
                    model,
                    p_res,
                    &rates,
                    densities,
                    FlowDirection::BoundaryToWellbore,
                ),
                Fluid::Gas => solve_gas(
                    config,
                    p_res,
                    &rates,
                    densities,
                    FlowDirection::BoundaryToWellbore,
                ),
                Fluid::Multiphase { .. } => solve_general(
                    config,
                    fluid,
                    p_res,
                    &rates,
                    densities,
                    FlowDirection::BoundaryToWellbore,
                ),
            };
            (q, solved)
        })
        .collect();

    let mut points = Vec::with_capacity(n);
    let mut truncated = false;
    for (step, (rate, solved)) in evaluations.into_iter().enumerate() {
        match solved {
            Ok(result) => {
                let p_wf = result.outlet_pressure.value;
                if p_wf < P_ATM_PA {
                    debug!(rate, p_wf, "sweep truncated below atmospheric pressure");
                    truncated = true;
                    break;
                }
                points.push(IprPoint {
                    rate_m3s: rate,
                    pressure_pa: p_wf,
                });
            }
            Err(InflowError::Domain { what }) => {
                debug!(rate, reason = %what, "sweep truncated at infeasible operating point");
                truncated = true;
                break;
            }
            Err(source) => {
                return Err(IprError::Solver {
                    step: step + 1,
                    source,
                });
            }
        }
    }
    info!(
        kept = points.len(),
        requested = n,
        truncated,
        "IPR sweep finished"
    );

    Ok(IprCurve { points, truncated })
}

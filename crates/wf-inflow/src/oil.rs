//! Closed-form radial inflow for undersaturated oil.
//!
//! Single incompressible liquid phase with dissolved gas: the Darcy drawdown
//! integrates analytically, so the solver is one viscosity evaluation plus a
//! feasibility check against the bubble point.

use std::f64::consts::PI;

use tracing::debug;
use wf_core::units::{Pressure, pa};
use wf_core::{ensure_finite, linspace};
use wf_pvt::{OilModel, bubble_point, oil_viscosity};

use crate::config::{FlowDirection, ReservoirConfig};
use crate::error::{InflowError, InflowResult};
use crate::profile::{PROFILE_SAMPLES, PressureProfile, SolverResult};
use crate::rates::{StandardDensities, SurfaceRates};

/// Solve the radial inflow equation for an oil well.
///
/// `inlet_pressure` sits at the wellbore or at the boundary depending on
/// `direction`; the result carries the pressure at the opposite end. The
/// whole drainage area must stay above the bubble point, otherwise the
/// single-phase assumption is void and the solver reports a domain error.
pub fn solve_oil(
    config: &ReservoirConfig,
    model: &OilModel,
    inlet_pressure: Pressure,
    rates: &SurfaceRates,
    densities: &StandardDensities,
    direction: FlowDirection,
) -> InflowResult<SolverResult> {
    config.validate()?;
    rates.require_oil_well()?;

    let q_o = rates.oil.value;
    let r_go = rates.gas_oil_ratio();
    let rho_g = densities.gas.value;
    let rho_o = densities.oil.value;
    let t_c = config.t_c();
    let p_in = inlet_pressure.value;

    let mu_o = oil_viscosity(p_in, r_go, rho_g, rho_o, t_c)?;

    let (r_w, r_e) = (config.r_w.value, config.r_e.value);
    let k = config.permeability.value;
    let h = config.h.value;
    let two_pi_kh = 2.0 * PI * k * h;
    let log_span = (r_e / r_w).ln();

    let drawdown = ensure_finite(
        -mu_o * q_o * (log_span - config.geometry_factor() + config.skin) / two_pi_kh,
        "oil drawdown",
    )?;
    let dp_skin = -mu_o * q_o * config.skin / two_pi_kh;

    // p_res is the anchored reservoir pressure, p_wf the flowing wellbore
    // pressure; drawdown > 0 for production
    let (p_out, p_wf, p_res) = match direction {
        FlowDirection::WellboreToBoundary => (p_in + drawdown, p_in, p_in + drawdown),
        FlowDirection::BoundaryToWellbore => (p_in - drawdown, p_in - drawdown, p_in),
    };
    debug!(p_wf, p_res, drawdown, mu_o, "oil drawdown solved");

    let p_b = bubble_point(model, r_go, rho_g, rho_o, t_c)?;
    let p_min = p_wf.min(p_res);
    if p_min < p_b {
        return Err(InflowError::Domain {
            what: format!(
                "pressure {p_min:.0} Pa falls below the bubble point {p_b:.0} Pa; \
                 free gas would evolve in the reservoir"
            ),
        });
    }

    // log-linear profile from the sandface (skin jump removed) out to the
    // anchored pressure
    let sandface = p_wf + dp_skin;
    let radii = linspace(r_w, r_e, PROFILE_SAMPLES);
    let pressures = radii
        .iter()
        .map(|&r| sandface + (p_res - sandface) * (r / r_w).ln() / log_span)
        .collect();

    let productivity_index = if p_res != p_wf {
        Some(-q_o / (p_res - p_wf))
    } else {
        None
    };

    Ok(SolverResult {
        outlet_pressure: pa(p_out),
        profile: PressureProfile::new(radii, pressures),
        productivity_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FlowRegime, PressureAnchor};
    use wf_core::units::{celsius, m, m2};

    fn config() -> ReservoirConfig {
        ReservoirConfig {
            h: m(20.0),
            permeability: m2(1.11e-13),
            r_w: m(0.2),
            r_e: m(500.0),
            temperature: celsius(60.0),
            skin: 0.0,
            forchheimer_beta: 0.0,
            regime: FlowRegime::Steady,
            anchor: PressureAnchor::Boundary,
        }
    }

    fn densities() -> StandardDensities {
        StandardDensities::new(0.95, 850.0, 1000.0)
    }

    #[test]
    fn inward_drawdown_is_positive_and_moderate() {
        let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
        let res = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        let p_wf = res.outlet_pressure.value;
        assert!(p_wf < 3.5e7, "p_wf = {p_wf}");
        // a 430 bbl/d well in 111 mD rock loses a few tens of bar
        assert!(p_wf > 3.0e7, "p_wf = {p_wf}");
    }

    #[test]
    fn outward_and_inward_runs_are_inverses() {
        let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
        let cfg = config();
        let inward = solve_oil(
            &cfg,
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        let outward = solve_oil(
            &cfg,
            &OilModel::Standing,
            inward.outlet_pressure,
            &rates,
            &densities(),
            FlowDirection::WellboreToBoundary,
        )
        .unwrap();
        // viscosity is evaluated at the inlet pressure, so the round trip is
        // approximate
        let p_back = outward.outlet_pressure.value;
        assert!((p_back - 3.5e7).abs() < 0.02 * 3.5e7, "p_back = {p_back}");
    }

    #[test]
    fn skin_steepens_the_drawdown() {
        let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
        let clean = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        let mut damaged_cfg = config();
        damaged_cfg.skin = 5.0;
        let damaged = solve_oil(
            &damaged_cfg,
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        assert!(damaged.outlet_pressure.value < clean.outlet_pressure.value);
    }

    #[test]
    fn geometry_factor_softens_the_drawdown() {
        let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
        let steady = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        let mut pss_cfg = config();
        pss_cfg.regime = FlowRegime::PseudoSteady;
        pss_cfg.anchor = PressureAnchor::Average;
        let pss = solve_oil(
            &pss_cfg,
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        // f_R = 0.75 shrinks the effective log term relative to f_R = 0
        assert!(pss.outlet_pressure.value > steady.outlet_pressure.value);
    }

    #[test]
    fn profile_is_monotonic_and_anchored() {
        let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
        let res = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        let p = res.profile.pressures_pa();
        assert_eq!(p.len(), PROFILE_SAMPLES);
        assert!(p.windows(2).all(|w| w[1] >= w[0]), "pressure must rise outward");
        let last = p[p.len() - 1];
        assert!((last - 3.5e7).abs() < 1.0, "boundary sample = {last}");
    }

    #[test]
    fn productivity_index_matches_definition() {
        let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
        let res = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        let j = res.productivity_index.unwrap();
        let drawdown = 3.5e7 - res.outlet_pressure.value;
        assert!((j - 0.005 / drawdown).abs() < 1e-15, "j = {j}");
        assert!(j > 0.0);
    }

    #[test]
    fn shut_in_well_has_flat_profile() {
        let rates = SurfaceRates::new(0.0, 0.0, 0.0);
        let res = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        assert_eq!(res.outlet_pressure.value, 3.5e7);
        assert!(res.productivity_index.is_none());
        assert!(res.profile.pressures_pa().iter().all(|&p| p == 3.5e7));
    }

    #[test]
    fn crossing_the_bubble_point_is_a_domain_error() {
        // hard drawdown from just above the bubble point
        let rates = SurfaceRates::new(-10.0, -0.05, 0.0);
        let err = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(2.6e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap_err();
        assert!(matches!(err, InflowError::Domain { .. }), "got {err:?}");
    }

    #[test]
    fn water_flow_is_rejected() {
        let rates = SurfaceRates::new(-1.0, -0.005, -0.001);
        let err = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap_err();
        assert!(matches!(err, InflowError::InvalidUsage { .. }));
    }

    #[test]
    fn injection_raises_wellbore_pressure() {
        let rates = SurfaceRates::new(0.0, 0.005, 0.0);
        let res = solve_oil(
            &config(),
            &OilModel::Standing,
            pa(3.5e7),
            &rates,
            &densities(),
            FlowDirection::BoundaryToWellbore,
        )
        .unwrap();
        assert!(res.outlet_pressure.value > 3.5e7);
    }
}

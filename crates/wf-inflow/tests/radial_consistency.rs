//! Cross-checks between the closed-form solvers and the general ODE solver.

use wf_core::units::{celsius, m, m2, pa};
use wf_inflow::{
    Fluid, FlowDirection, FlowRegime, PressureAnchor, ReservoirConfig, StandardDensities,
    SurfaceRates, solve_gas, solve_general, solve_oil,
};
use wf_pvt::{OilModel, RelPermParams};

fn reference_config() -> ReservoirConfig {
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

fn reference_densities() -> StandardDensities {
    StandardDensities::new(0.95, 850.0, 1000.0)
}

#[test]
fn general_solver_reproduces_the_oil_closed_form() {
    let config = reference_config();
    let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
    let closed = solve_oil(
        &config,
        &OilModel::Standing,
        pa(3.5e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();
    let numeric = solve_general(
        &config,
        &Fluid::Oil {
            model: OilModel::Standing,
        },
        pa(3.5e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();

    // the closed form freezes viscosity at the inlet pressure while the
    // integrator re-evaluates it locally, so agreement is to a few percent of
    // the drawdown
    let drawdown = 3.5e7 - closed.outlet_pressure.value;
    assert!(drawdown > 0.0);
    let gap = (numeric.outlet_pressure.value - closed.outlet_pressure.value).abs();
    assert!(
        gap < 0.05 * drawdown,
        "closed {} vs numeric {} (drawdown {drawdown})",
        closed.outlet_pressure.value,
        numeric.outlet_pressure.value
    );
}

#[test]
fn multiphase_with_unit_mobility_collapses_to_single_phase_oil() {
    // endpoint 1, no residual saturations, no water, no free gas: the
    // three-phase mobility is exactly 1/mu_o
    let relperm = RelPermParams {
        k_rg0: 1.0,
        k_ro0: 1.0,
        k_rw0: 1.0,
        n_g: 2.0,
        n_og: 2.0,
        n_ow: 2.0,
        n_w: 2.0,
        s_gc: 0.0,
        s_or: 0.0,
        s_wi: 0.0,
    };
    let config = reference_config();
    let rates = SurfaceRates::new(0.0, -0.005, 0.0);
    let oil = solve_general(
        &config,
        &Fluid::Oil {
            model: OilModel::Standing,
        },
        pa(3.5e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();
    let multi = solve_general(
        &config,
        &Fluid::Multiphase {
            model: OilModel::Standing,
            relperm,
        },
        pa(3.5e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();
    let gap = (multi.outlet_pressure.value - oil.outlet_pressure.value).abs();
    assert!(gap < 1.0, "gap = {gap} Pa");
}

#[test]
fn general_solver_tracks_the_gas_fixed_point() {
    let config = reference_config();
    let rates = SurfaceRates::new(-3.0, 0.0, 0.0);
    let fixed_point = solve_gas(
        &config,
        pa(3.0e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();
    let numeric = solve_general(
        &config,
        &Fluid::Gas,
        pa(3.0e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();

    let dd_fixed = 3.0e7 - fixed_point.outlet_pressure.value;
    let dd_numeric = 3.0e7 - numeric.outlet_pressure.value;
    assert!(dd_fixed > 0.0 && dd_numeric > 0.0);
    // the p² formulation lags mu·B at the average pressure; both must agree on
    // the scale of the drawdown
    let ratio = dd_numeric / dd_fixed;
    assert!((0.5..2.0).contains(&ratio), "ratio = {ratio}");
}

#[test]
fn oil_profiles_agree_along_the_radius() {
    let config = reference_config();
    let rates = SurfaceRates::new(-1.0, -0.005, 0.0);
    let closed = solve_oil(
        &config,
        &OilModel::Standing,
        pa(3.5e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();
    let numeric = solve_general(
        &config,
        &Fluid::Oil {
            model: OilModel::Standing,
        },
        pa(3.5e7),
        &rates,
        &reference_densities(),
        FlowDirection::BoundaryToWellbore,
    )
    .unwrap();

    let drawdown = 3.5e7 - closed.outlet_pressure.value;
    // compare the numeric profile against the closed-form log interpolation
    let p_wf = closed.outlet_pressure.value;
    let log_span = (500.0f64 / 0.2).ln();
    for (r, p) in numeric.profile.samples() {
        let expected = p_wf + (3.5e7 - p_wf) * (r / 0.2).ln() / log_span;
        assert!(
            (p - expected).abs() < 0.05 * drawdown,
            "r = {r}, p = {p}, expected = {expected}"
        );
    }
}

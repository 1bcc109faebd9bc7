//! Bubble-point pressure correlations and the oil-model selector.
//!
//! Both black-oil correlations share the same contract: SI in, SI out, result
//! floored at atmospheric pressure, and a zero gas density means gas-free oil
//! (bubble point at atmospheric pressure, not an error).

use crate::error::{PvtError, PvtResult};
use crate::transforms::{deg_api, deg_f, ft3_per_bbl, gas_gravity, pa_from_psi};
use crate::volatile_oil::VolatileOilTable;
use wf_core::constants::P_ATM_PA;

/// Bubble-point correlation selector.
///
/// The volatile-oil variant owns its lookup table, so every consumer that holds
/// the selector also holds the data the correlation needs.
#[derive(Debug, Clone, PartialEq)]
pub enum OilModel {
    /// Standing black-oil correlation.
    Standing,
    /// Glaso black-oil correlation.
    Glaso,
    /// Tabulated volatile-oil dataset.
    VolatileOil(VolatileOilTable),
}

/// Bubble-point pressure [Pa] for the selected oil model.
///
/// `r_sb` is the solution gas-oil ratio at the bubble point [m³/m³]; the
/// tabulated variant is indexed by temperature only, matching its table layout.
pub fn bubble_point(
    model: &OilModel,
    r_sb: f64,
    rho_g_sc: f64,
    rho_o_sc: f64,
    t_c: f64,
) -> PvtResult<f64> {
    match model {
        OilModel::Standing => bubble_point_standing(r_sb, rho_g_sc, rho_o_sc, t_c),
        OilModel::Glaso => bubble_point_glaso(r_sb, rho_g_sc, rho_o_sc, t_c),
        OilModel::VolatileOil(table) => table.bubble_point(t_c),
    }
}

fn check_densities(rho_g_sc: f64, rho_o_sc: f64) -> PvtResult<()> {
    if rho_g_sc < 0.0 {
        return Err(PvtError::NonPhysical {
            what: "gas density at standard conditions",
        });
    }
    if rho_o_sc <= 0.0 {
        return Err(PvtError::NonPhysical {
            what: "oil density at standard conditions",
        });
    }
    Ok(())
}

/// Standing bubble-point correlation [Pa].
pub fn bubble_point_standing(
    r_sb: f64,
    rho_g_sc: f64,
    rho_o_sc: f64,
    t_c: f64,
) -> PvtResult<f64> {
    check_densities(rho_g_sc, rho_o_sc)?;
    if r_sb < 0.0 {
        return Err(PvtError::NonPhysical {
            what: "solution gas-oil ratio",
        });
    }
    if rho_g_sc == 0.0 {
        // Gas-free oil: bubble point is atmospheric by contract.
        return Ok(P_ATM_PA);
    }

    let help = 10f64.powf(0.00164 * t_c) / 10f64.powf(1768.0 / rho_o_sc);
    let p_b = 125.0e3 * ((716.0 * r_sb / rho_g_sc).powf(0.83) * help - 1.4);

    Ok(p_b.max(P_ATM_PA))
}

/// Glaso bubble-point correlation [Pa].
///
/// The fit is a log-log polynomial in oilfield units; inputs are converted to
/// API gravity, gas gravity, ft³/bbl and °F, the result back from psi.
pub fn bubble_point_glaso(r_sb: f64, rho_g_sc: f64, rho_o_sc: f64, t_c: f64) -> PvtResult<f64> {
    check_densities(rho_g_sc, rho_o_sc)?;
    if r_sb < 0.0 {
        return Err(PvtError::NonPhysical {
            what: "solution gas-oil ratio",
        });
    }
    if rho_g_sc == 0.0 {
        return Ok(P_ATM_PA);
    }

    let gamma_api = deg_api(rho_o_sc);
    if gamma_api <= 0.0 {
        return Err(PvtError::OutOfRange {
            what: "oil gravity for Glaso correlation",
        });
    }

    let gamma_g = gas_gravity(rho_g_sc);
    let r_sb_fu = ft3_per_bbl(r_sb);
    let t_fu = deg_f(t_c);

    let (a, b, c) = (0.816, 0.172, 0.989);
    let p_b_star = (r_sb_fu / gamma_g).powf(a) * t_fu.powf(b) / gamma_api.powf(c);
    let log_star = p_b_star.log10();
    let p_b_fu = 10f64.powf(1.7669 + 1.7447 * log_star - 0.30218 * log_star * log_star);

    Ok(pa_from_psi(p_b_fu).max(P_ATM_PA))
}

/// Solution gas-oil ratio [m³/m³] at local pressure, Standing inverted.
///
/// Returns the dissolved gas the oil can hold at `p_pa`; callers cap it at the
/// total producing gas-oil ratio. Zero gas density dissolves nothing.
pub fn solution_gor_standing(
    p_pa: f64,
    rho_g_sc: f64,
    rho_o_sc: f64,
    t_c: f64,
) -> PvtResult<f64> {
    check_densities(rho_g_sc, rho_o_sc)?;
    if p_pa < 0.0 {
        return Err(PvtError::NonPhysical { what: "pressure" });
    }
    if rho_g_sc == 0.0 {
        return Ok(0.0);
    }

    let help = 10f64.powf(1768.0 / rho_o_sc - 0.00164 * t_c);
    let r_s = (rho_g_sc / 716.0) * ((p_pa / 125.0e3 + 1.4) * help).powf(1.0 / 0.83);

    Ok(r_s.max(0.0))
}

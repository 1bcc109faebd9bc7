//! Phase viscosity correlations.
//!
//! All three are smooth in pressure and strictly positive on their validity
//! range, which is what the solvers rely on.

use crate::bubble_point::bubble_point_standing;
use crate::error::{PvtError, PvtResult};
use crate::gas::{pseudo_critical_pressure_sutton, pseudo_critical_temperature_sutton, z_factor_dak};
use crate::transforms::{deg_api, deg_f, deg_rankine, ft3_per_bbl, gas_gravity, psi_from_pa};

/// Oil viscosity [Pa·s] (Beggs–Robinson dead/live oil, Vazquez–Beggs above the
/// bubble point).
///
/// `r_sb` is the solution gas-oil ratio [m³/m³]; the undersaturated correction
/// kicks in above the Standing bubble point for that ratio.
pub fn oil_viscosity(
    p_pa: f64,
    r_sb: f64,
    rho_g_sc: f64,
    rho_o_sc: f64,
    t_c: f64,
) -> PvtResult<f64> {
    if p_pa < 0.0 {
        return Err(PvtError::NonPhysical { what: "pressure" });
    }
    if r_sb < 0.0 {
        return Err(PvtError::NonPhysical {
            what: "solution gas-oil ratio",
        });
    }
    let api = deg_api(rho_o_sc);
    if rho_o_sc <= 0.0 || api <= 0.0 {
        return Err(PvtError::OutOfRange {
            what: "oil density for Beggs-Robinson correlation",
        });
    }
    let t_f = deg_f(t_c);
    if t_f <= 0.0 {
        return Err(PvtError::OutOfRange {
            what: "temperature for Beggs-Robinson correlation",
        });
    }

    // dead oil
    let x = t_f.powf(-1.163) * 10f64.powf(3.0324 - 0.02023 * api);
    let mu_dead_cp = 10f64.powf(x) - 1.0;

    // live oil
    let r_s_fu = ft3_per_bbl(r_sb);
    let a = 10.715 * (r_s_fu + 100.0).powf(-0.515);
    let b = 5.44 * (r_s_fu + 150.0).powf(-0.338);
    let mut mu_cp = a * mu_dead_cp.powf(b);

    // undersaturated correction
    let p_b = bubble_point_standing(r_sb, rho_g_sc, rho_o_sc, t_c)?;
    if p_pa > p_b {
        let p_psi = psi_from_pa(p_pa);
        let m = 2.6 * p_psi.powf(1.187) * (-11.513 - 8.98e-5 * p_psi).exp();
        mu_cp *= (p_pa / p_b).powf(m);
    }

    Ok(mu_cp * 1e-3)
}

/// Gas viscosity [Pa·s] (Lee–Gonzalez–Eakin), with the in-situ gas density
/// taken from the Sutton/DAK real-gas model.
pub fn gas_viscosity(p_pa: f64, rho_g_sc: f64, t_c: f64) -> PvtResult<f64> {
    if p_pa <= 0.0 {
        return Err(PvtError::NonPhysical { what: "pressure" });
    }

    let p_pc = pseudo_critical_pressure_sutton(rho_g_sc)?;
    let t_pc = pseudo_critical_temperature_sutton(rho_g_sc)?;
    let t_abs = t_c + 273.15;
    let z = z_factor_dak(p_pa / p_pc, t_abs / t_pc)?;

    let m_g = 28.97 * gas_gravity(rho_g_sc); // kg/kmol
    let t_r = deg_rankine(t_c);

    // Lee-Gonzalez-Eakin works in g/cm³ and micropoise
    let rho_gcc = 1.4935e-3 * psi_from_pa(p_pa) * m_g / (z * t_r);
    let k_v = (9.379 + 0.01607 * m_g) * t_r.powf(1.5) / (209.2 + 19.26 * m_g + t_r);
    let x = 3.448 + 986.4 / t_r + 0.01009 * m_g;
    let y = 2.447 - 0.2224 * x;

    Ok(k_v * (x * rho_gcc.powf(y)).exp() * 1e-7)
}

/// Water viscosity [Pa·s] (Brill–Beggs temperature fit).
pub fn water_viscosity(t_c: f64) -> f64 {
    let t_f = deg_f(t_c);
    (1.003 - 1.479e-2 * t_f + 1.982e-5 * t_f * t_f).exp() * 1e-3
}

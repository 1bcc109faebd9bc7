//! Real-gas property correlations: Sutton pseudo-criticals, the
//! Dranchuk–Abou-Kassem compressibility factor and the formation volume factor.

use crate::error::{PvtError, PvtResult};
use crate::transforms::{gas_gravity, pa_from_psi};
use wf_core::constants::{P_SC_PA, T_SC_C};

/// Pseudo-critical pressure [Pa] from gas density at standard conditions (Sutton).
pub fn pseudo_critical_pressure_sutton(rho_g_sc: f64) -> PvtResult<f64> {
    if rho_g_sc <= 0.0 {
        return Err(PvtError::NonPhysical {
            what: "gas density at standard conditions",
        });
    }
    let gamma = gas_gravity(rho_g_sc);
    Ok(pa_from_psi(756.8 - 131.07 * gamma - 3.6 * gamma * gamma))
}

/// Pseudo-critical temperature [K] from gas density at standard conditions (Sutton).
pub fn pseudo_critical_temperature_sutton(rho_g_sc: f64) -> PvtResult<f64> {
    if rho_g_sc <= 0.0 {
        return Err(PvtError::NonPhysical {
            what: "gas density at standard conditions",
        });
    }
    let gamma = gas_gravity(rho_g_sc);
    // Sutton tabulates °R; the boundary is SI.
    Ok((169.2 + 349.5 * gamma - 74.0 * gamma * gamma) / 1.8)
}

// Dranchuk–Abou-Kassem constants A1..A11
const A: [f64; 11] = [
    0.3265, -1.0700, -0.5339, 0.01569, -0.05165, 0.5475, -0.7361, 0.1844, 0.1056, 0.6134, 0.7210,
];

/// Real-gas compressibility factor from reduced pressure and temperature
/// (Dranchuk–Abou-Kassem).
///
/// The correlation is implicit in Z through the reduced density
/// `rho_r = 0.27 p_pr / (Z t_pr)`; it is solved by damped successive
/// substitution with a bounded pass count. Results land in (0, ~1.5] over the
/// correlation's validity region.
pub fn z_factor_dak(p_pr: f64, t_pr: f64) -> PvtResult<f64> {
    if !p_pr.is_finite() || p_pr < 0.0 {
        return Err(PvtError::NonPhysical {
            what: "reduced pressure",
        });
    }
    if p_pr > 30.0 {
        return Err(PvtError::OutOfRange {
            what: "reduced pressure for DAK correlation",
        });
    }
    if !(1.0..=3.0).contains(&t_pr) {
        return Err(PvtError::OutOfRange {
            what: "reduced temperature for DAK correlation",
        });
    }
    if p_pr == 0.0 {
        return Ok(1.0);
    }

    let c1 = A[0] + A[1] / t_pr + A[2] / t_pr.powi(3) + A[3] / t_pr.powi(4) + A[4] / t_pr.powi(5);
    let c2 = A[5] + A[6] / t_pr + A[7] / t_pr.powi(2);
    let c3 = A[8] * (A[6] / t_pr + A[7] / t_pr.powi(2));

    let mut z = 1.0;
    for _ in 0..200 {
        let rho_r = 0.27 * p_pr / (z * t_pr);
        let rho_r2 = rho_r * rho_r;
        let z_new = 1.0
            + c1 * rho_r
            + c2 * rho_r2
            - c3 * rho_r2 * rho_r2 * rho_r
            + A[9] * (1.0 + A[10] * rho_r2) * (rho_r2 / t_pr.powi(3)) * (-A[10] * rho_r2).exp();

        if !z_new.is_finite() || z_new <= 0.0 {
            return Err(PvtError::ConvergenceFailed {
                what: "DAK Z-factor iteration left the physical range",
            });
        }
        if (z_new - z).abs() < 1e-10 {
            return Ok(z_new);
        }
        // damped substitution keeps the dense-gas branch stable
        z = 0.5 * (z + z_new);
    }

    Err(PvtError::ConvergenceFailed {
        what: "DAK Z-factor iteration",
    })
}

/// Gas formation volume factor [m³/m³] at the given pressure, temperature and
/// compressibility factor (Z at standard conditions taken as 1).
pub fn gas_fvf(p_pa: f64, t_c: f64, z: f64) -> PvtResult<f64> {
    if p_pa <= 0.0 {
        return Err(PvtError::NonPhysical { what: "pressure" });
    }
    let t_abs = t_c + 273.15;
    let t_sc_abs = T_SC_C + 273.15;
    Ok((P_SC_PA * t_abs * z) / (p_pa * t_sc_abs))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn z_factor_bounded_on_validity_region(
            p_pr in 0.2_f64..8.0,
            t_pr in 1.2_f64..2.2,
        ) {
            let z = z_factor_dak(p_pr, t_pr).unwrap();
            prop_assert!(z.is_finite());
            prop_assert!((0.2..1.5).contains(&z), "z = {} at ({}, {})", z, p_pr, t_pr);
        }
    }
}

//! Oilfield unit transforms used inside the empirical correlations.
//!
//! These never cross the public SI boundary.

use wf_core::constants::RHO_AIR_SC;

pub(crate) const PA_PER_PSI: f64 = 6894.76;

/// Gas specific gravity relative to air.
#[inline]
pub(crate) fn gas_gravity(rho_g_sc: f64) -> f64 {
    rho_g_sc / RHO_AIR_SC
}

/// Stock-tank oil gravity in °API.
#[inline]
pub(crate) fn deg_api(rho_o_sc: f64) -> f64 {
    141.5 / (rho_o_sc / 999.1) - 131.5
}

/// m³/m³ to ft³/bbl.
#[inline]
pub(crate) fn ft3_per_bbl(r: f64) -> f64 {
    r * 5.615
}

/// °C to °F.
#[inline]
pub(crate) fn deg_f(t_c: f64) -> f64 {
    t_c * 9.0 / 5.0 + 32.0
}

/// °C to °R (absolute Rankine).
#[inline]
pub(crate) fn deg_rankine(t_c: f64) -> f64 {
    (t_c + 273.15) * 1.8
}

#[inline]
pub(crate) fn pa_from_psi(p_psi: f64) -> f64 {
    p_psi * PA_PER_PSI
}

#[inline]
pub(crate) fn psi_from_pa(p_pa: f64) -> f64 {
    p_pa / PA_PER_PSI
}

//! Corey-type relative permeability for two- and three-phase flow.

use crate::error::{PvtError, PvtResult};

/// Endpoint relative permeabilities, Corey exponents and critical/residual
/// saturations. Matches the classic ten-entry rel-perm data block
/// (k_rg0, k_ro0, k_rw0, n_g, n_og, n_ow, n_w, S_gc, S_or, S_wi).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelPermParams {
    /// Gas endpoint relative permeability
    pub k_rg0: f64,
    /// Oil endpoint relative permeability
    pub k_ro0: f64,
    /// Water endpoint relative permeability
    pub k_rw0: f64,
    /// Corey exponent, gas
    pub n_g: f64,
    /// Corey exponent, oil in gas-oil flow
    pub n_og: f64,
    /// Corey exponent, oil in oil-water flow
    pub n_ow: f64,
    /// Corey exponent, water
    pub n_w: f64,
    /// Critical gas saturation
    pub s_gc: f64,
    /// Residual oil saturation
    pub s_or: f64,
    /// Initial (connate) water saturation
    pub s_wi: f64,
}

fn norm(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

impl RelPermParams {
    pub fn validate(&self) -> PvtResult<()> {
        let endpoints = [self.k_rg0, self.k_ro0, self.k_rw0];
        if endpoints.iter().any(|k| !(0.0..=1.0).contains(k)) {
            return Err(PvtError::InvalidArg {
                what: "endpoint relative permeabilities must lie in [0, 1]",
            });
        }
        let exponents = [self.n_g, self.n_og, self.n_ow, self.n_w];
        if exponents.iter().any(|n| !n.is_finite() || *n <= 0.0) {
            return Err(PvtError::InvalidArg {
                what: "Corey exponents must be positive",
            });
        }
        let sats = [self.s_gc, self.s_or, self.s_wi];
        if sats.iter().any(|s| !(0.0..1.0).contains(s)) {
            return Err(PvtError::InvalidArg {
                what: "critical/residual saturations must lie in [0, 1)",
            });
        }
        if self.s_gc + self.s_or + self.s_wi >= 1.0 {
            return Err(PvtError::InvalidArg {
                what: "critical/residual saturations must leave mobile pore space",
            });
        }
        Ok(())
    }

    /// Water relative permeability at water saturation `s_w`.
    pub fn kr_water(&self, s_w: f64) -> f64 {
        let s = norm((s_w - self.s_wi) / (1.0 - self.s_wi - self.s_or));
        self.k_rw0 * s.powf(self.n_w)
    }

    /// Gas relative permeability at gas saturation `s_g`.
    pub fn kr_gas(&self, s_g: f64) -> f64 {
        let s = norm((s_g - self.s_gc) / (1.0 - self.s_gc - self.s_wi - self.s_or));
        self.k_rg0 * s.powf(self.n_g)
    }

    /// Oil relative permeability at water saturation `s_w` and gas saturation
    /// `s_g` (normalized product of the oil-water and gas-oil branches).
    pub fn kr_oil(&self, s_w: f64, s_g: f64) -> f64 {
        if self.k_ro0 <= 0.0 {
            return 0.0;
        }
        let s_ow = norm((1.0 - s_w - self.s_or) / (1.0 - self.s_wi - self.s_or));
        let s_og = norm((1.0 - s_g - self.s_wi - self.s_or) / (1.0 - self.s_wi - self.s_or - self.s_gc));
        let k_row = self.k_ro0 * s_ow.powf(self.n_ow);
        let k_rog = self.k_ro0 * s_og.powf(self.n_og);
        k_row * k_rog / self.k_ro0
    }
}

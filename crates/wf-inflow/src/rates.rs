//! Surface-rate and standard-condition-density input records.

use wf_core::units::{Density, VolumeRate, kgpm3, m3ps};

use crate::error::{InflowError, InflowResult};

/// Phase rates at standard conditions. Negative is production (flow from the
/// reservoir into the well), positive is injection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRates {
    pub gas: VolumeRate,
    pub oil: VolumeRate,
    pub water: VolumeRate,
}

impl SurfaceRates {
    /// Rates in m³/s, `(gas, oil, water)` order.
    pub fn new(gas: f64, oil: f64, water: f64) -> Self {
        Self {
            gas: m3ps(gas),
            oil: m3ps(oil),
            water: m3ps(water),
        }
    }

    /// Producing gas-oil ratio [m³/m³]; zero when no oil flows.
    pub fn gas_oil_ratio(&self) -> f64 {
        if self.oil.value != 0.0 {
            self.gas.value / self.oil.value
        } else {
            0.0
        }
    }

    pub(crate) fn require_finite(&self) -> InflowResult<()> {
        let all = [self.gas.value, self.oil.value, self.water.value];
        if all.iter().any(|q| !q.is_finite()) {
            return Err(InflowError::InvalidUsage {
                what: "surface rates must be finite",
            });
        }
        Ok(())
    }

    /// Oil wells carry oil and dissolved gas only.
    pub(crate) fn require_oil_well(&self) -> InflowResult<()> {
        self.require_finite()?;
        if self.water.value != 0.0 {
            return Err(InflowError::InvalidUsage {
                what: "oil solver does not handle water flow",
            });
        }
        Ok(())
    }

    /// Gas wells carry a single dry-gas phase.
    pub(crate) fn require_gas_well(&self) -> InflowResult<()> {
        self.require_finite()?;
        if self.oil.value != 0.0 || self.water.value != 0.0 {
            return Err(InflowError::InvalidUsage {
                what: "gas solver does not handle oil or water flow",
            });
        }
        Ok(())
    }
}

/// Phase densities at standard conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardDensities {
    pub gas: Density,
    pub oil: Density,
    pub water: Density,
}

impl StandardDensities {
    /// Densities in kg/m³, `(gas, oil, water)` order.
    pub fn new(gas: f64, oil: f64, water: f64) -> Self {
        Self {
            gas: kgpm3(gas),
            oil: kgpm3(oil),
            water: kgpm3(water),
        }
    }
}

// wf-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

pub mod constants {
    /// Atmospheric pressure, also the physical floor of every pressure result [Pa]
    pub const P_ATM_PA: f64 = 1.0e5;

    /// Standard-condition pressure [Pa]
    pub const P_SC_PA: f64 = 1.0e5;

    /// Standard-condition temperature [°C]
    pub const T_SC_C: f64 = 15.0;

    /// Density of air at standard conditions [kg/m³], reference for gas gravity
    pub const RHO_AIR_SC: f64 = 1.225;
}

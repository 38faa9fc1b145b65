// cs-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Pressure as UomPressure, Ratio as UomRatio,
    Time as UomTime, Velocity as UomVelocity, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Time = UomTime;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;

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
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    /// Standard atmosphere (Pa).
    pub const P_ATM_PA: f64 = 101_325.0;

    /// Density of air at sea level (kg/m³).
    pub const RHO_AIR_KG_M3: f64 = 1.225;

    #[inline]
    pub fn p_atm() -> Pressure {
        pa(P_ATM_PA)
    }

    /// Convert shaft speed from rad/s to revolutions per minute.
    #[inline]
    pub fn rpm_from_rad_s(omega_rad_s: f64) -> f64 {
        omega_rad_s * 60.0 / core::f64::consts::TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _l = m(0.045);
        let _a = m2(5.5e-3);
        let _v = m3(8.4e-4);
        let _dt = s(0.001);
        let _vel = mps(2.0);
        let _r = unitless(0.5);
        let _atm = constants::p_atm();
    }

    #[test]
    fn rpm_conversion() {
        // One revolution per second is 2π rad/s and 60 RPM.
        let rpm = constants::rpm_from_rad_s(core::f64::consts::TAU);
        assert!((rpm - 60.0).abs() < 1e-9);
    }
}

//! Cylinder head valve geometry and flow-area proxy.

use crate::error::{PhysicsError, PhysicsResult};
use cs_core::units::{Length, Volume};

/// Lateral surface area of a conical frustum (m²).
///
/// A lifted poppet valve opens an annular gap between the valve rim (radius
/// `big_radius_m`) and its seat (radius `small_radius_m`); the slanted band
/// spanned by the lift `height_m` serves as the flow-area proxy:
///
/// A = π·(R + r)·√((R − r)² + h²)
pub fn frustum_lateral_area(big_radius_m: f64, small_radius_m: f64, height_m: f64) -> f64 {
    let dr = big_radius_m - small_radius_m;
    core::f64::consts::PI * (big_radius_m + small_radius_m) * (dr * dr + height_m * height_m).sqrt()
}

/// Poppet valve dimensions: the valve rim and the seat it closes against.
#[derive(Clone, Debug)]
pub struct ValveGeometry {
    /// Valve head radius (m)
    pub valve_radius: Length,
    /// Seat radius (m)
    pub seat_radius: Length,
}

impl ValveGeometry {
    /// Create a valve geometry; both radii must be positive.
    pub fn new(valve_radius: Length, seat_radius: Length) -> PhysicsResult<Self> {
        if valve_radius.value <= 0.0 || seat_radius.value <= 0.0 {
            return Err(PhysicsError::InvalidArg {
                what: "valve radii must be positive",
            });
        }
        Ok(Self {
            valve_radius,
            seat_radius,
        })
    }

    /// Flow area opened at the given lift (m²).
    ///
    /// At zero lift this degenerates to the flat seat annulus π·(R² − r²);
    /// whether that still counts as "open" is decided by the caller against
    /// [`crate::VALVE_AREA_EPSILON_M2`].
    pub fn flow_area_m2(&self, lift_m: f64) -> f64 {
        frustum_lateral_area(self.valve_radius.value, self.seat_radius.value, lift_m)
    }
}

/// Cylinder head: one intake and one exhaust valve plus the combustion-dome
/// volume above TDC.
#[derive(Clone, Debug)]
pub struct Head {
    pub intake: ValveGeometry,
    pub exhaust: ValveGeometry,
    /// Dome volume above TDC. Not yet part of the chamber volume terms.
    pub volume: Volume,
}

impl Head {
    pub fn new(intake: ValveGeometry, exhaust: ValveGeometry, volume: Volume) -> Self {
        Self {
            intake,
            exhaust,
            volume,
        }
    }

    /// Exhaust flow area at the given lift (m²).
    pub fn exhaust_flow_area_m2(&self, lift_m: f64) -> f64 {
        self.exhaust.flow_area_m2(lift_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VALVE_AREA_EPSILON_M2;
    use cs_core::units::{m, m3};

    fn exhaust_valve() -> ValveGeometry {
        ValveGeometry::new(m(0.0145), m(0.0135)).unwrap()
    }

    #[test]
    fn frustum_reduces_to_annulus_at_zero_height() {
        // h = 0: A = π(R + r)(R − r) = π(R² − r²)
        let a = frustum_lateral_area(0.0145, 0.0135, 0.0);
        let annulus = core::f64::consts::PI * (0.0145f64.powi(2) - 0.0135f64.powi(2));
        assert!((a - annulus).abs() < 1e-15);
    }

    #[test]
    fn frustum_grows_with_height() {
        let a0 = frustum_lateral_area(0.0145, 0.0135, 0.001);
        let a1 = frustum_lateral_area(0.0145, 0.0135, 0.01);
        assert!(a1 > a0);
    }

    #[test]
    fn seated_exhaust_valve_area_is_below_threshold() {
        // With the stock exhaust valve the seat annulus is ~8.8e-5 m², so a
        // fully seated valve lands in the closed branch of the pressure model.
        let valve = exhaust_valve();
        assert!(valve.flow_area_m2(0.0) < VALVE_AREA_EPSILON_M2);
        assert!(valve.flow_area_m2(0.01) > VALVE_AREA_EPSILON_M2);
    }

    #[test]
    fn negative_lift_still_opens_area() {
        // Lift enters squared, so a negative displacement command opens the
        // same area as a positive one.
        let valve = exhaust_valve();
        assert_eq!(valve.flow_area_m2(-0.01), valve.flow_area_m2(0.01));
    }

    #[test]
    fn rejects_non_positive_radii() {
        assert!(ValveGeometry::new(m(0.0), m(0.0135)).is_err());
        assert!(ValveGeometry::new(m(0.0145), m(-0.1)).is_err());
    }

    #[test]
    fn head_routes_exhaust_area() {
        let head = Head::new(
            ValveGeometry::new(m(0.0165), m(0.015)).unwrap(),
            exhaust_valve(),
            m3(0.00084),
        );
        let direct = exhaust_valve().flow_area_m2(0.004);
        assert_eq!(head.exhaust_flow_area_m2(0.004), direct);
    }
}

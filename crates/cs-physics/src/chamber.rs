//! Quasi-static chamber pressure model.
//!
//! The chamber pressure is recomputed from scratch every tick from the
//! instantaneous piston motion and valve opening; no trapped-gas mass or
//! temperature is carried. Two branches:
//!
//! - **valve open** — a Bernoulli-style restriction: the piston drives flow
//!   through the valve area, and the pressure offset scales with the
//!   velocity-squared difference across the restriction;
//! - **valve closed** — pressure scales inversely with the swept volume,
//!   referenced to ambient.
//!
//! Nothing bounds the result to be non-negative; extreme piston speeds
//! through a barely-open valve can produce non-physical negative pressures.

use crate::common::VALVE_AREA_EPSILON_M2;
use crate::error::{PhysicsError, PhysicsResult};
use cs_core::units::constants::RHO_AIR_KG_M3;
use cs_core::units::{Area, Length, Pressure};

/// Cylinder bore/stroke geometry and the back-pressure reference.
#[derive(Clone, Debug)]
pub struct CylinderGeometry {
    /// Bore diameter (m)
    pub bore: Length,
    /// Stroke length (m), nominally twice the crank radius
    pub stroke: Length,
    /// Ambient (crankcase-side) pressure (Pa)
    pub ambient_pressure: Pressure,
}

impl CylinderGeometry {
    /// Create a cylinder geometry; bore and stroke must be positive.
    pub fn new(bore: Length, stroke: Length, ambient_pressure: Pressure) -> PhysicsResult<Self> {
        if bore.value <= 0.0 {
            return Err(PhysicsError::InvalidArg {
                what: "bore must be positive",
            });
        }
        if stroke.value <= 0.0 {
            return Err(PhysicsError::InvalidArg {
                what: "stroke must be positive",
            });
        }
        Ok(Self {
            bore,
            stroke,
            ambient_pressure,
        })
    }

    /// Piston cross-sectional area π·(bore/2)² (m²).
    pub fn piston_area_m2(&self) -> f64 {
        let r = self.bore.value / 2.0;
        core::f64::consts::PI * r * r
    }

    /// Piston cross-sectional area as a typed quantity.
    pub fn piston_area(&self) -> Area {
        use uom::si::area::square_meter;
        Area::new::<square_meter>(self.piston_area_m2())
    }

    /// Reference volume for the closed-valve branch (m³): area × stroke/2.
    ///
    /// A fixed proxy volume, not the true swept volume at the instant the
    /// valve closed.
    pub fn reference_volume_m3(&self) -> f64 {
        self.piston_area_m2() * self.stroke.value / 2.0
    }
}

/// Instantaneous piston motion feeding the pressure model.
#[derive(Clone, Copy, Debug)]
pub struct PistonMotion {
    /// Piston pin position along the cylinder axis (m)
    pub position_m: f64,
    /// Piston velocity (m/s)
    pub velocity_m_s: f64,
    /// Piston cross-sectional area (m²)
    pub area_m2: f64,
}

/// Chamber pressure (Pa) from piston motion and the exhaust flow area.
///
/// Exactly one branch executes per call, selected by comparing the flow area
/// against [`VALVE_AREA_EPSILON_M2`].
// TODO: fold Head::volume into the vi/vc volume terms.
pub fn chamber_pressure(
    cyl: &CylinderGeometry,
    rod_length_m: f64,
    piston: &PistonMotion,
    exhaust_flow_area_m2: f64,
) -> f64 {
    let vp = piston.velocity_m_s;
    let ap = piston.area_m2;
    let pa = cyl.ambient_pressure.value;
    let stroke = cyl.stroke.value;

    if exhaust_flow_area_m2 > VALVE_AREA_EPSILON_M2 {
        // Open valve: flow velocity through the restriction, then Bernoulli.
        let vaa = vp * ap / exhaust_flow_area_m2;
        0.5 * RHO_AIR_KG_M3 * (vaa * vaa - vp * vp) + pa
    } else {
        // Closed valve: pressure inversely proportional to the swept volume.
        let vi = cyl.reference_volume_m3();
        let vc = ap * (stroke + rod_length_m - piston.position_m);
        vi * pa / vc
    }
}

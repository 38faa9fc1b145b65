//! Crank-slider kinematics: piston motion and crank torque.
//!
//! The mechanism converts crank rotation into piston reciprocation through a
//! connecting rod of fixed length. All formulas use the TDC phase convention
//! φ = θ + π/2, so θ = 0 places the crank pin a quarter turn before top dead
//! center along the cylinder axis.

use crate::error::{PhysicsError, PhysicsResult};
use cs_core::units::Length;

/// Crank-slider linkage geometry.
///
/// `rod_length` must exceed `crank_radius`, otherwise the square roots in the
/// kinematic formulas go negative. `new` enforces this; constructing the
/// struct directly bypasses the check, in which case position and velocity
/// evaluate to NaN rather than panicking.
#[derive(Clone, Debug)]
pub struct CrankSlider {
    /// Crank (throw) radius (m)
    pub crank_radius: Length,
    /// Connecting rod length, pin to pin (m)
    pub rod_length: Length,
}

impl CrankSlider {
    /// Create a crank-slider linkage.
    ///
    /// # Errors
    /// Returns an error if either length is non-positive or if the rod is not
    /// strictly longer than the crank radius.
    pub fn new(crank_radius: Length, rod_length: Length) -> PhysicsResult<Self> {
        if crank_radius.value <= 0.0 {
            return Err(PhysicsError::InvalidArg {
                what: "crank radius must be positive",
            });
        }
        if rod_length.value <= 0.0 {
            return Err(PhysicsError::InvalidArg {
                what: "rod length must be positive",
            });
        }
        if rod_length.value <= crank_radius.value {
            return Err(PhysicsError::InvalidArg {
                what: "rod length must exceed crank radius",
            });
        }
        Ok(Self {
            crank_radius,
            rod_length,
        })
    }

    /// Rod ratio n = L/r.
    pub fn rod_ratio(&self) -> f64 {
        self.rod_length.value / self.crank_radius.value
    }

    /// Piston pin distance from the crank pivot along the cylinder axis (m).
    ///
    /// position = r·cos φ + √(L² − r²·sin²φ), φ = θ + π/2.
    ///
    /// At θ = 0 the pin sits at √(L² − r²); at θ = π/2 (φ = π) it reaches the
    /// bottom of the stroke at L − r.
    pub fn piston_position(&self, theta_rad: f64) -> f64 {
        let r = self.crank_radius.value;
        let l = self.rod_length.value;
        let phi = theta_rad + core::f64::consts::FRAC_PI_2;
        let sa = phi.sin();
        r * phi.cos() + (l * l - r * r * sa * sa).sqrt()
    }

    /// Piston velocity along the cylinder axis (m/s).
    ///
    /// velocity = −ω·r·(sin φ + sin 2φ / (2·√(n² − sin²φ)))
    pub fn piston_velocity(&self, theta_rad: f64, omega_rad_s: f64) -> f64 {
        let r = self.crank_radius.value;
        let n = self.rod_ratio();
        let phi = theta_rad + core::f64::consts::FRAC_PI_2;
        let sa = phi.sin();
        -omega_rad_s * r * (sa + (2.0 * phi).sin() / (2.0 * (n * n - sa * sa).sqrt()))
    }

    /// Torque on the crank produced by a net force on the piston (N·m).
    ///
    /// τ = F·r·(cos θ + sin 2θ / (2·√(n² − sin²θ)))
    ///
    /// Note the torque conversion runs on θ itself, not on the shifted phase
    /// used by the position formulas.
    pub fn crank_torque(&self, net_force_n: f64, theta_rad: f64) -> f64 {
        let r = self.crank_radius.value;
        let n = self.rod_ratio();
        let st = theta_rad.sin();
        net_force_n * r * (theta_rad.cos() + (2.0 * theta_rad).sin() / (2.0 * (n * n - st * st).sqrt()))
    }
}

//! Crankshaft rotational dynamics.

use crate::error::{SimError, SimResult};
use cs_physics::CrankSlider;
use tracing::warn;

/// Default linear damping rate (1/s), representing viscous and friction loss
/// proportional to speed.
pub const DEFAULT_DAMPING_RATE_PER_S: f64 = 10.0;

/// State of the crankshaft.
///
/// `theta_rad` accumulates without wraparound; collaborators that want a
/// bounded angle reduce it themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShaftState {
    /// Crank angle (rad, unbounded)
    pub theta_rad: f64,
    /// Angular velocity (rad/s)
    pub omega_rad_s: f64,
    /// Angular acceleration from the last step (rad/s², derived)
    pub alpha_rad_s2: f64,
    /// Total torque from the last step (N·m, derived)
    pub torque_n_m: f64,
}

/// Crankshaft parameters: a rotational rigid body on a fixed pivot.
///
/// Advances (θ, ω) by explicit forward Euler:
///
/// ```text
/// τ = τ_crank(F_piston, θ) + τ_external
/// α = τ / I
/// ω ← ω + α·dt
/// ω ← ω − ω·(damping·dt)
/// θ ← θ + ω·dt
/// ```
///
/// If ω or θ comes out non-finite, that variable is silently reset to zero.
/// This is the simulation's only recovery from upstream domain errors (a NaN
/// piston force, a divergent step); a `tracing` warning is emitted but no
/// error is returned.
#[derive(Clone, Debug)]
pub struct Shaft {
    /// Moment of inertia (kg·m²)
    pub inertia_kg_m2: f64,
    /// Linear damping rate (1/s); loss per step is ω·damping·dt
    pub damping_rate_per_s: f64,
    /// Static friction coefficient. Reserved; the loss model is purely
    /// viscous and does not apply it.
    pub static_friction_mu: f64,
    /// Pivot x position (m). Mount point for collaborators projecting the
    /// crank into their own coordinates; not simulated.
    pub pivot_x_m: f64,
    /// Pivot y position (m). Not simulated.
    pub pivot_y_m: f64,
}

impl Shaft {
    /// Create a shaft.
    ///
    /// # Errors
    /// Returns an error if inertia is not positive or the damping rate is
    /// negative.
    pub fn new(inertia_kg_m2: f64, damping_rate_per_s: f64) -> SimResult<Self> {
        if inertia_kg_m2 <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "shaft inertia must be positive",
            });
        }
        if damping_rate_per_s < 0.0 {
            return Err(SimError::InvalidArg {
                what: "damping rate cannot be negative",
            });
        }
        Ok(Self {
            inertia_kg_m2,
            damping_rate_per_s,
            static_friction_mu: 0.0,
            pivot_x_m: 0.0,
            pivot_y_m: 0.0,
        })
    }

    /// Advance the shaft state by one step.
    ///
    /// # Arguments
    /// * `crank` - linkage geometry for the force→torque conversion
    /// * `piston_net_force_n` - net piston force from THIS tick (N)
    /// * `external_torque_n_m` - externally commanded torque (N·m)
    /// * `dt_s` - elapsed time since the previous step (s)
    pub fn step(
        &self,
        state: &ShaftState,
        crank: &CrankSlider,
        piston_net_force_n: f64,
        external_torque_n_m: f64,
        dt_s: f64,
    ) -> ShaftState {
        let torque =
            crank.crank_torque(piston_net_force_n, state.theta_rad) + external_torque_n_m;
        let alpha = torque / self.inertia_kg_m2;

        let mut omega = state.omega_rad_s + alpha * dt_s;
        omega -= omega * self.damping_rate_per_s * dt_s;
        let mut theta = state.theta_rad + omega * dt_s;

        if !omega.is_finite() {
            warn!(omega, "shaft angular velocity non-finite, resetting to zero");
            omega = 0.0;
        }
        if !theta.is_finite() {
            warn!(theta, "shaft angle non-finite, resetting to zero");
            theta = 0.0;
        }

        ShaftState {
            theta_rad: theta,
            omega_rad_s: omega,
            alpha_rad_s2: alpha,
            torque_n_m: torque,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::units::m;

    fn test_crank() -> CrankSlider {
        CrankSlider::new(m(0.045), m(0.14435)).unwrap()
    }

    fn test_shaft() -> Shaft {
        Shaft::new(0.09, DEFAULT_DAMPING_RATE_PER_S).unwrap()
    }

    #[test]
    fn shaft_invalid_params() {
        assert!(Shaft::new(0.0, 10.0).is_err());
        assert!(Shaft::new(-1.0, 10.0).is_err());
        assert!(Shaft::new(0.09, -0.1).is_err());
        assert!(Shaft::new(0.09, 0.0).is_ok());
    }

    #[test]
    fn external_torque_spins_up() {
        let shaft = test_shaft();
        let crank = test_crank();
        let state = ShaftState::default();

        let next = shaft.step(&state, &crank, 0.0, 100.0, 0.001);

        // α = 100/0.09, ω = α·dt then damped by (1 − 10·dt)
        let alpha = 100.0 / 0.09;
        let omega = alpha * 0.001 * (1.0 - 10.0 * 0.001);
        assert!((next.alpha_rad_s2 - alpha).abs() < 1e-9);
        assert!((next.omega_rad_s - omega).abs() < 1e-12);
        assert!((next.theta_rad - omega * 0.001).abs() < 1e-15);
    }

    #[test]
    fn free_spin_decays_geometrically() {
        let shaft = test_shaft();
        let crank = test_crank();
        let dt = 0.01;
        let mut state = ShaftState {
            omega_rad_s: 50.0,
            ..Default::default()
        };

        // With zero force and zero external torque each step multiplies ω by
        // exactly (1 − damping·dt).
        let factor = 1.0 - DEFAULT_DAMPING_RATE_PER_S * dt;
        let mut expected = 50.0;
        for _ in 0..20 {
            state = shaft.step(&state, &crank, 0.0, 0.0, dt);
            expected *= factor;
            assert!((state.omega_rad_s - expected).abs() < 1e-9);
        }
        assert!(state.omega_rad_s < 50.0 * 0.13);
    }

    #[test]
    fn angle_accumulates_without_wraparound() {
        let shaft = Shaft::new(0.09, 0.0).unwrap();
        let crank = test_crank();
        let mut state = ShaftState {
            omega_rad_s: 100.0,
            ..Default::default()
        };
        for _ in 0..1000 {
            state = shaft.step(&state, &crank, 0.0, 0.0, 0.001);
        }
        // 100 rad/s for 1 s with no losses: far past 2π, never wrapped.
        assert!((state.theta_rad - 100.0).abs() < 1e-6);
    }

    #[test]
    fn nan_omega_resets_to_zero() {
        let shaft = test_shaft();
        let crank = test_crank();
        let state = ShaftState {
            omega_rad_s: f64::NAN,
            ..Default::default()
        };

        let next = shaft.step(&state, &crank, 0.0, 0.0, 0.001);
        assert_eq!(next.omega_rad_s, 0.0);
        // θ += NaN·dt poisons the angle too; both recover in the same step.
        assert_eq!(next.theta_rad, 0.0);
    }

    #[test]
    fn nan_theta_resets_to_zero() {
        let shaft = test_shaft();
        let crank = test_crank();
        let state = ShaftState {
            theta_rad: f64::NAN,
            omega_rad_s: 5.0,
            ..Default::default()
        };

        let next = shaft.step(&state, &crank, 0.0, 0.0, 0.001);
        assert_eq!(next.theta_rad, 0.0);
        // ω picks up a NaN through the torque conversion at a NaN angle.
        assert_eq!(next.omega_rad_s, 0.0);
    }

    #[test]
    fn infinite_omega_recovers_in_one_step() {
        let shaft = test_shaft();
        let crank = test_crank();
        let state = ShaftState {
            omega_rad_s: f64::INFINITY,
            ..Default::default()
        };

        let next = shaft.step(&state, &crank, 0.0, 0.0, 0.001);
        assert_eq!(next.omega_rad_s, 0.0);
        assert_eq!(next.theta_rad, 0.0);
    }

    #[test]
    fn nan_piston_force_is_absorbed() {
        let shaft = test_shaft();
        let crank = test_crank();
        let state = ShaftState {
            omega_rad_s: 10.0,
            theta_rad: 1.0,
            ..Default::default()
        };

        let next = shaft.step(&state, &crank, f64::NAN, 0.0, 0.001);
        assert_eq!(next.omega_rad_s, 0.0);
        assert_eq!(next.theta_rad, 0.0);
        // Derived quantities keep the poisoned values for diagnostics.
        assert!(next.torque_n_m.is_nan());
    }
}

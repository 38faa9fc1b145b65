//! Valve-lift actuator with first-order dynamics and rate limiting.
//!
//! The tick driver applies commanded lift instantaneously; drivers that want
//! a non-ideal valve run the command through this actuator BEFORE building
//! the tick's [`crate::Controls`].

use crate::error::{SimError, SimResult};

/// State of the lift actuator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActuatorState {
    /// Current position as a fraction of full lift, [0, 1]
    pub position: f64,
}

/// First-order lift actuator with rate limiting.
///
/// Dynamics: dpos/dt = (cmd − pos)/tau, clamped to ±rate_limit; position is
/// clamped to [0, 1] and scaled by `max_lift_m` to produce metres of lift.
#[derive(Clone, Debug)]
pub struct LiftActuator {
    /// Time constant (seconds)
    pub tau_s: f64,
    /// Rate limit (fraction of full lift per second), must be positive
    pub rate_limit_per_s: f64,
    /// Lift at position 1.0 (m)
    pub max_lift_m: f64,
}

impl LiftActuator {
    /// Create a lift actuator.
    pub fn new(tau_s: f64, rate_limit_per_s: f64, max_lift_m: f64) -> SimResult<Self> {
        if tau_s <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "tau must be positive",
            });
        }
        if rate_limit_per_s <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "rate limit must be positive",
            });
        }
        if max_lift_m <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "max lift must be positive",
            });
        }
        Ok(Self {
            tau_s,
            rate_limit_per_s,
            max_lift_m,
        })
    }

    /// Position derivative for the given command (fraction of full lift).
    pub fn dpdt(&self, position: f64, command: f64) -> f64 {
        let raw = (command - position) / self.tau_s;
        raw.clamp(-self.rate_limit_per_s, self.rate_limit_per_s)
    }

    /// Advance the actuator by dt toward the commanded fraction.
    pub fn step(&self, state: &ActuatorState, dt_s: f64, command: f64) -> ActuatorState {
        let dpdt = self.dpdt(state.position, command);
        ActuatorState {
            position: (state.position + dpdt * dt_s).clamp(0.0, 1.0),
        }
    }

    /// Lift in metres for the current state.
    pub fn lift_m(&self, state: &ActuatorState) -> f64 {
        state.position * self.max_lift_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_response_approaches_command() {
        let act = LiftActuator::new(0.05, 50.0, 0.01).unwrap();
        let mut state = ActuatorState::default();

        for _ in 0..200 {
            state = act.step(&state, 0.002, 1.0);
        }
        assert!(state.position > 0.95);
        assert!(act.lift_m(&state) > 0.0095);
    }

    #[test]
    fn rate_limiting_caps_dpdt() {
        let act = LiftActuator::new(1.0, 0.5, 0.01).unwrap();
        // raw dpdt would be 1.0, clamped to 0.5
        assert!((act.dpdt(0.0, 1.0) - 0.5).abs() < 1e-12);
        assert!((act.dpdt(1.0, 0.0) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn position_clamped_to_unit_interval() {
        let act = LiftActuator::new(0.01, 1000.0, 0.01).unwrap();

        let state = act.step(&ActuatorState { position: 0.9 }, 0.1, 5.0);
        assert!(state.position <= 1.0);

        let state = act.step(&ActuatorState { position: 0.1 }, 0.1, -5.0);
        assert!(state.position >= 0.0);
    }

    #[test]
    fn invalid_params_rejected() {
        assert!(LiftActuator::new(0.0, 1.0, 0.01).is_err());
        assert!(LiftActuator::new(0.1, 0.0, 0.01).is_err());
        assert!(LiftActuator::new(0.1, 1.0, 0.0).is_err());
    }
}

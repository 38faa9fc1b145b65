//! Control inputs for the tick driver.
//!
//! The physics core never polls an input device; whatever drives it
//! (keyboard loop, script, CLI) builds a [`Controls`] value per tick.

/// The two control commands consumed by a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    /// Externally applied shaft torque (N·m)
    pub external_torque_n_m: f64,
    /// Commanded exhaust valve lift (m)
    pub exhaust_valve_lift_m: f64,
}

/// Discrete direction commands, as produced by e.g. key pairs.
///
/// Each axis is −1, 0, or +1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInput {
    /// Torque direction: +1 forward, −1 reverse, 0 idle
    pub torque_direction: i8,
    /// Valve direction: +1 open, −1 negative lift, 0 seated
    pub valve_direction: i8,
}

impl ControlInput {
    pub const NEUTRAL: Self = Self {
        torque_direction: 0,
        valve_direction: 0,
    };
}

/// Scaling from direction commands to physical control values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlMap {
    /// Torque per unit direction (N·m)
    pub torque_magnitude_n_m: f64,
    /// Lift per unit direction (m)
    pub valve_lift_m: f64,
}

impl Default for ControlMap {
    fn default() -> Self {
        Self {
            torque_magnitude_n_m: 100.0,
            valve_lift_m: 0.01,
        }
    }
}

impl ControlMap {
    /// Scale a direction input into per-tick controls.
    ///
    /// A negative valve direction maps to a negative lift command; the
    /// flow-area model treats it as an opening either way.
    pub fn controls(&self, input: ControlInput) -> Controls {
        Controls {
            external_torque_n_m: self.torque_magnitude_n_m * f64::from(input.torque_direction),
            exhaust_valve_lift_m: self.valve_lift_m * f64::from(input.valve_direction),
        }
    }
}

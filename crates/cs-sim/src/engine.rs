//! The tick driver: one engine, one cylinder, one fixed update order.
//!
//! Each tick runs valve write → piston → cylinder → shaft. The order is
//! load-bearing: the piston stage reads the chamber pressure computed on the
//! PREVIOUS tick (one-tick lag), while the shaft stage reads the net piston
//! force computed on THIS tick.

use crate::controls::Controls;
use crate::shaft::{Shaft, ShaftState};
use cs_core::units::Pressure;
use cs_core::units::constants::rpm_from_rad_s;
use cs_physics::{CrankSlider, CylinderGeometry, Head, PistonMotion, chamber_pressure};

/// Per-tick piston outputs.
///
/// Fully recomputed every tick from shaft and cylinder state; the piston
/// carries no memory of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct PistonState {
    /// Pin distance from the crank pivot along the cylinder axis (m)
    pub position_m: f64,
    /// Velocity along the cylinder axis (m/s)
    pub velocity_m_s: f64,
    /// Cross-sectional area (m²), recomputed from the bore each tick
    pub area_m2: f64,
    /// Force from chamber pressure (N)
    pub in_force_n: f64,
    /// Force from ambient back-pressure (N)
    pub out_force_n: f64,
    /// in_force − out_force (N)
    pub net_force_n: f64,
}

/// Valve lift state on the head.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValveState {
    /// Exhaust valve lift (m), written from the control input every tick
    pub exhaust_lift_m: f64,
    /// Intake valve lift (m). Never written by the driver; stays zero.
    pub intake_lift_m: f64,
}

/// Complete simulation state, owned by the driver and mutated in place.
#[derive(Clone, Copy, Debug)]
pub struct EngineState {
    pub shaft: ShaftState,
    pub piston: PistonState,
    /// Chamber pressure (Pa), the one state variable carried across ticks
    pub chamber_pressure_pa: f64,
    pub valves: ValveState,
    /// dt of the most recent tick (s)
    pub last_dt_s: f64,
    /// Accumulated simulated time (s)
    pub elapsed_s: f64,
}

/// Derived display quantities for collaborators.
#[derive(Clone, Copy, Debug)]
pub struct Telemetry {
    /// Chamber pressure relative to ambient (Pa)
    pub gauge_pressure_pa: f64,
    /// Shaft speed (revolutions per minute)
    pub rpm: f64,
    /// dt of the most recent tick (s)
    pub dt_s: f64,
}

/// A single-cylinder engine: linkage, cylinder, head, and shaft parameters.
#[derive(Clone, Debug)]
pub struct Engine {
    pub crank: CrankSlider,
    pub cylinder: CylinderGeometry,
    pub head: Head,
    pub shaft: Shaft,
}

impl Engine {
    /// State at rest with the chamber at ambient pressure.
    pub fn initial_state(&self) -> EngineState {
        self.initial_state_with_pressure(self.cylinder.ambient_pressure)
    }

    /// State at rest with a prescribed chamber pressure (e.g. a pre-charged
    /// chamber that kicks the crank on the first tick).
    pub fn initial_state_with_pressure(&self, chamber: Pressure) -> EngineState {
        EngineState {
            shaft: ShaftState::default(),
            piston: PistonState::default(),
            chamber_pressure_pa: chamber.value,
            valves: ValveState::default(),
            last_dt_s: 0.0,
            elapsed_s: 0.0,
        }
    }

    /// Advance the simulation by one tick of `dt_s` seconds.
    ///
    /// `dt_s` is whatever the caller measured or chose; the integration is
    /// variable-timestep explicit Euler and degrades at large steps.
    pub fn tick(&self, state: &mut EngineState, controls: &Controls, dt_s: f64) {
        // Control input lands on the head first.
        state.valves.exhaust_lift_m = controls.exhaust_valve_lift_m;

        // Piston stage: kinematics from the shaft, forces from the chamber
        // pressure of the previous tick.
        state.piston = self.piston_stage(state);

        // Cylinder stage: fresh piston motion against the current lift.
        let flow_area = self.head.exhaust_flow_area_m2(state.valves.exhaust_lift_m);
        let motion = PistonMotion {
            position_m: state.piston.position_m,
            velocity_m_s: state.piston.velocity_m_s,
            area_m2: state.piston.area_m2,
        };
        state.chamber_pressure_pa = chamber_pressure(
            &self.cylinder,
            self.crank.rod_length.value,
            &motion,
            flow_area,
        );

        // Shaft stage: fresh net force plus the commanded torque.
        state.shaft = self.shaft.step(
            &state.shaft,
            &self.crank,
            state.piston.net_force_n,
            controls.external_torque_n_m,
            dt_s,
        );

        state.last_dt_s = dt_s;
        state.elapsed_s += dt_s;
    }

    /// Display quantities for the current state.
    pub fn telemetry(&self, state: &EngineState) -> Telemetry {
        Telemetry {
            gauge_pressure_pa: state.chamber_pressure_pa - self.cylinder.ambient_pressure.value,
            rpm: rpm_from_rad_s(state.shaft.omega_rad_s),
            dt_s: state.last_dt_s,
        }
    }

    fn piston_stage(&self, state: &EngineState) -> PistonState {
        let area = self.cylinder.piston_area_m2();
        let position = self.crank.piston_position(state.shaft.theta_rad);
        let velocity = self
            .crank
            .piston_velocity(state.shaft.theta_rad, state.shaft.omega_rad_s);

        let in_force = state.chamber_pressure_pa * area;
        let out_force = self.cylinder.ambient_pressure.value * area;

        PistonState {
            position_m: position,
            velocity_m_s: velocity,
            area_m2: area,
            in_force_n: in_force,
            out_force_n: out_force,
            net_force_n: in_force - out_force,
        }
    }
}

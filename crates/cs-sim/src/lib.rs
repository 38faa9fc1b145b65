//! Transient simulation of a single-cylinder reciprocating engine.
//!
//! Provides:
//! - crankshaft dynamics with explicit Euler integration and silent
//!   non-finite recovery
//! - the tick driver coupling piston kinematics, chamber pressure, and
//!   shaft dynamics in a fixed stage order
//! - control-input types and the mapping from discrete direction commands
//! - valve-lift actuator with first-order dynamics
//! - fixed-step batch runner with decimated recording

pub mod actuator;
pub mod controls;
pub mod engine;
pub mod error;
pub mod runner;
pub mod shaft;

// Re-exports for public API
pub use actuator::{ActuatorState, LiftActuator};
pub use controls::{ControlInput, ControlMap, Controls};
pub use engine::{Engine, EngineState, PistonState, Telemetry, ValveState};
pub use error::{SimError, SimResult};
pub use runner::{SimOptions, SimRecord, run_sim};
pub use shaft::{Shaft, ShaftState};

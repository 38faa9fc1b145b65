//! cs-physics: closed-form physics for a single-cylinder reciprocating engine.
//!
//! Everything in this crate is a pure function of its inputs:
//! - crank-slider kinematics (piston position/velocity, crank torque)
//! - frustum lateral area as the valve flow-area proxy
//! - the two-branch quasi-static chamber pressure model
//!
//! Stateful time stepping lives in cs-sim; this crate holds no state across
//! calls and performs no integration.

pub mod chamber;
pub mod common;
pub mod error;
pub mod head;
pub mod kinematics;

pub use chamber::{CylinderGeometry, PistonMotion, chamber_pressure};
pub use common::VALVE_AREA_EPSILON_M2;
pub use error::{PhysicsError, PhysicsResult};
pub use head::{Head, ValveGeometry, frustum_lateral_area};
pub use kinematics::CrankSlider;

//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while configuring or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<cs_physics::PhysicsError> for SimError {
    fn from(e: cs_physics::PhysicsError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<cs_core::CoreError> for SimError {
    fn from(e: cs_core::CoreError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}

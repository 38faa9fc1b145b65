//! Error types for physics calculations.

use thiserror::Error;

/// Errors from geometry construction and physics evaluation.
#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

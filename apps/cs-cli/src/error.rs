//! Error type for the CLI layer.

use std::path::PathBuf;

/// Wraps errors from the simulation crates and the config/IO surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid engine configuration: {0}")]
    Config(String),

    #[error("Simulation error: {0}")]
    Simulation(#[from] cs_sim::SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

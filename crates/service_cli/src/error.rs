//! CLI error types.

use costsim_engine::SimulationError;
use thiserror::Error;

/// Errors surfaced by `costsim` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input or configuration file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Command-line argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file or environment value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine rejected the simulation parameters.
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// CSV input or output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON input or output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

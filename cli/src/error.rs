//! Application error handling
//!
//! Library errors from the shared crate are wrapped here together with the
//! I/O and parsing failures of the batch sources.

use thiserror::Error;
use workout_tracker_shared::{CalibrationError, WorkoutError};

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Package {index} ({workout_type}) rejected: {source}")]
    Package {
        index: usize,
        workout_type: String,
        #[source]
        source: WorkoutError,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calibration error: {0}")]
    Calibration(#[from] CalibrationError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Create an invalid input error from a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

//! Error types for the Workout Tracker

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while turning a sensor package into a calculator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Invalid arguments for {workout}: expected {expected} values, got {actual}")]
    ArgumentCountMismatch {
        workout: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid sample: {}", .0.user_message())]
    InvalidSample(ValidationError),
}

impl From<ValidationError> for WorkoutError {
    fn from(err: ValidationError) -> Self {
        WorkoutError::InvalidSample(err)
    }
}

/// Calibration error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("Coefficient {name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("Coefficient {name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

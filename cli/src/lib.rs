//! Workout Tracker CLI Library
//!
//! Package loading, batch processing and output rendering, shared by the
//! `workout-tracker` binary and the integration tests.

pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod packages;

pub use error::{CliError, Result};

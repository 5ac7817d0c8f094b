//! Workout Tracker Shared Library
//!
//! This crate contains the workout metric calculators, the package
//! dispatcher and the report types used by the CLI and WASM modules.

pub mod calibration;
pub mod dispatcher;
pub mod errors;
pub mod report;
pub mod validation;
pub mod workout;

// Re-export commonly used items
pub use calibration::Calibration;
pub use dispatcher::{build_calculator, WorkoutKind};
pub use errors::*;
pub use report::WorkoutReport;
pub use workout::{Running, SportsWalking, Swimming, Training, Workout, WorkoutSample};

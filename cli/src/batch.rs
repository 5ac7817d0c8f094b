//! Batch processing of sensor packages
//!
//! Each package is dispatched and reported independently, in input order.
//! A rejected package either aborts the batch or is logged and skipped,
//! depending on [`BatchConfig::fail_fast`].

use tracing::{debug, info, warn};
use workout_tracker_shared::{Calibration, Training, WorkoutError, WorkoutReport};

use crate::config::BatchConfig;
use crate::error::{CliError, Result};
use crate::packages::WorkoutPackage;

/// A package that could not be turned into a report
#[derive(Debug, Clone, PartialEq)]
pub struct PackageFailure {
    /// Zero-based position in the input
    pub index: usize,
    pub workout_type: String,
    pub error: WorkoutError,
}

/// Result of processing a whole batch
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Reports of the accepted packages, in input order
    pub reports: Vec<WorkoutReport>,
    pub failures: Vec<PackageFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check the formula coefficients before any package is processed
pub fn ensure_calibration(calibration: &Calibration) -> Result<()> {
    calibration.validate()?;
    debug!("Formula calibration verified");
    Ok(())
}

/// Dispatch every package and collect the reports
pub fn process_batch(packages: &[WorkoutPackage], config: &BatchConfig) -> Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        match package.build() {
            Ok(workout) => {
                let report = workout.report();
                debug!(
                    index,
                    workout = %workout.kind(),
                    distance_km = report.distance_km,
                    calories = report.calories,
                    "Processed package"
                );
                outcome.reports.push(report);
            }
            Err(error) if config.fail_fast => {
                return Err(CliError::Package {
                    index,
                    workout_type: package.workout_type.clone(),
                    source: error,
                });
            }
            Err(error) => {
                warn!(
                    index,
                    workout_type = %package.workout_type,
                    "Skipping package: {}",
                    error
                );
                outcome.failures.push(PackageFailure {
                    index,
                    workout_type: package.workout_type.clone(),
                    error,
                });
            }
        }
    }

    info!(
        processed = outcome.reports.len(),
        failed = outcome.failures.len(),
        "Batch complete"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::reference_packages;

    fn mixed_batch() -> Vec<WorkoutPackage> {
        vec![
            WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            WorkoutPackage::new("BIKE", vec![1.0, 1.0, 75.0]),
            WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0]),
            WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    #[test]
    fn test_reference_batch_is_complete() {
        let outcome = process_batch(&reference_packages(), &BatchConfig::default()).unwrap();
        assert!(outcome.is_complete());
        let names: Vec<_> = outcome.reports.iter().map(|r| r.type_name.as_str()).collect();
        assert_eq!(names, ["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_continue_policy_collects_failures() {
        let outcome = process_batch(&mixed_batch(), &BatchConfig { fail_fast: false }).unwrap();
        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(outcome.failures.len(), 2);

        assert_eq!(outcome.failures[0].index, 1);
        assert_eq!(
            outcome.failures[0].error,
            WorkoutError::UnknownWorkoutType("BIKE".to_string())
        );
        assert_eq!(outcome.failures[1].index, 2);
        assert!(matches!(
            outcome.failures[1].error,
            WorkoutError::ArgumentCountMismatch { expected: 5, actual: 3, .. }
        ));
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let err = process_batch(&mixed_batch(), &BatchConfig { fail_fast: true }).unwrap_err();
        match err {
            CliError::Package {
                index,
                workout_type,
                source,
            } => {
                assert_eq!(index, 1);
                assert_eq!(workout_type, "BIKE");
                assert_eq!(source, WorkoutError::UnknownWorkoutType("BIKE".to_string()));
            }
            other => panic!("expected package error, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_calibration_accepted() {
        assert!(ensure_calibration(&Calibration::STANDARD).is_ok());
    }

    #[test]
    fn test_broken_calibration_surfaces_as_cli_error() {
        let mut calibration = Calibration::STANDARD;
        calibration.running.step_length_m = -0.65;
        let err = ensure_calibration(&calibration).unwrap_err();
        assert!(matches!(err, CliError::Calibration(_)));
        assert!(err.to_string().contains("running.step_length_m"));
    }

    #[test]
    fn test_empty_batch() {
        let outcome = process_batch(&[], &BatchConfig::default()).unwrap();
        assert!(outcome.reports.is_empty());
        assert!(outcome.is_complete());
    }
}

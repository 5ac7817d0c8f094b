//! Sensor package dispatcher
//!
//! A package is a workout type code plus the sensor readings in positional
//! order. The dispatcher resolves the code, checks the argument count and
//! builds the matching calculator.

use std::fmt;

use crate::errors::WorkoutError;
use crate::validation::{check_field, parse_count};
use crate::workout::{Running, SportsWalking, Swimming, Workout, WorkoutSample};

/// Supported workout kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Code used by the sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional readings a package of this kind carries
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(s.to_string()))
    }
}

/// Build a calculator from a type code and positional readings
///
/// Readings are, in order: action count, duration (h), weight (kg), then
/// height for `WLK`, or pool length (m) and pool lengths for `SWM`.
pub fn build_calculator(type_code: &str, args: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = type_code.parse()?;

    if args.len() != kind.arity() {
        return Err(WorkoutError::ArgumentCountMismatch {
            workout: kind.display_name(),
            expected: kind.arity(),
            actual: args.len(),
        });
    }

    let action_count = check_field("action_count", parse_count(args[0]))?;
    let sample = WorkoutSample::new(action_count, args[1], args[2])?;

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running::new(sample)?),
        WorkoutKind::SportsWalking => {
            Workout::SportsWalking(SportsWalking::new(sample, args[3])?)
        }
        WorkoutKind::Swimming => {
            let pool_lengths_count = check_field("pool_lengths_count", parse_count(args[4]))?;
            Workout::Swimming(Swimming::new(sample, args[3], pool_lengths_count)?)
        }
    };

    Ok(workout)
}

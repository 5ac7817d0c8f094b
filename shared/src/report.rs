//! Workout summary report
//!
//! Values are kept at full precision; rounding to three decimals happens
//! only when the report is rendered as a message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived metrics for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub type_name: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl WorkoutReport {
    /// Render the one-line summary shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Serialize the report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.type_name, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

//! Workout Tracker WASM Module
//!
//! This crate provides WebAssembly bindings so a browser can turn a sensor
//! package into a workout summary without a round trip to a server.

use wasm_bindgen::prelude::*;
use workout_tracker_shared::{build_calculator, Training, WorkoutError, WorkoutReport};

fn report_for(workout_type: &str, data: &[f64]) -> Result<WorkoutReport, WorkoutError> {
    Ok(build_calculator(workout_type, data)?.report())
}

/// Summary line for one sensor package
#[wasm_bindgen]
pub fn workout_summary(workout_type: &str, data: &[f64]) -> Result<String, JsValue> {
    report_for(workout_type, data)
        .map(|report| report.message())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Full report for one sensor package, as JSON
#[wasm_bindgen]
pub fn workout_report_json(workout_type: &str, data: &[f64]) -> Result<String, JsValue> {
    let report = report_for(workout_type, data).map_err(|e| JsValue::from_str(&e.to_string()))?;
    report
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let summary = workout_summary("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(summary.starts_with("Тип тренировки: Running;"));
        assert!(summary.contains("Потрачено ккал: 699.750."));
    }

    #[test]
    fn test_report_json() {
        let json = workout_report_json("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type_name"], "Swimming");
        let calories = value["calories"].as_f64().unwrap();
        assert!((calories - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_errors_keep_their_kind() {
        // JsValue is unavailable off-wasm, so check the inner result
        assert!(matches!(
            report_for("ROW", &[1.0, 1.0, 75.0]),
            Err(WorkoutError::UnknownWorkoutType(_))
        ));
        assert!(matches!(
            report_for("WLK", &[9000.0, 1.0, 75.0]),
            Err(WorkoutError::ArgumentCountMismatch { expected: 4, .. })
        ));
    }
}

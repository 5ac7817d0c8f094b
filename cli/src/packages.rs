//! Sensor package sources
//!
//! Packages come from the built-in reference set, a JSON array or a
//! headerless CSV file with one `TYPE,value,value,...` row per workout.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use tracing::{debug, info};
use workout_tracker_shared::{build_calculator, Workout, WorkoutError};

use crate::config::{InputConfig, InputFormat};
use crate::error::{CliError, Result};

/// One raw sensor package: a type code and its positional readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Dispatch this package to its calculator
    pub fn build(&self) -> std::result::Result<Workout, WorkoutError> {
        build_calculator(&self.workout_type, &self.data)
    }
}

/// The sample session recorded by the sensor vendor
pub fn reference_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of packages
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<WorkoutPackage>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse headerless CSV rows of `TYPE,value,value,...`
///
/// Rows may have different lengths; blank lines and lines starting with
/// `#` are skipped.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<WorkoutPackage>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut packages = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let mut fields = record.iter();
        let workout_type = match fields.next() {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => {
                return Err(CliError::invalid_input(format!(
                    "line {}: missing workout type",
                    line
                )))
            }
        };

        let data = fields
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    CliError::invalid_input(format!(
                        "line {}: '{}' is not a number",
                        line, field
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        packages.push(WorkoutPackage { workout_type, data });
    }
    Ok(packages)
}

/// Load packages according to the input configuration
pub fn load(input: &InputConfig) -> Result<Vec<WorkoutPackage>> {
    let Some(path) = &input.path else {
        debug!("No input file configured, using reference packages");
        return Ok(reference_packages());
    };

    let format = input
        .format
        .or_else(|| InputFormat::from_path(path))
        .ok_or_else(|| {
            CliError::invalid_input(format!(
                "cannot infer input format of {}; set input.format",
                path.display()
            ))
        })?;

    let file = File::open(path)?;
    let packages = match format {
        InputFormat::Json => from_json_reader(file)?,
        InputFormat::Csv => from_csv_reader(file)?,
    };

    info!(
        path = %path.display(),
        format = ?format,
        count = packages.len(),
        "Loaded workout packages"
    );
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_reference_packages_build() {
        for package in reference_packages() {
            assert!(package.build().is_ok(), "{:?} failed", package);
        }
    }

    #[test]
    fn test_json_packages() {
        let json = r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "WLK", "data": [9000, 1.5, 75, 180]}
        ]"#;
        let packages = from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(packages[1].data, vec![9000.0, 1.5, 75.0, 180.0]);
    }

    #[test]
    fn test_json_rejects_non_numeric_data() {
        let json = r#"[{"workout_type": "RUN", "data": ["fast", 1, 75]}]"#;
        assert!(matches!(
            from_json_reader(json.as_bytes()),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn test_csv_variable_length_rows() {
        let csv = "# type,values...\nSWM, 720, 1, 80, 25, 40\n\nRUN,15000,1,75\nWLK,9000,1,75,180\n";
        let packages = from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(packages, reference_packages());
    }

    #[test]
    fn test_csv_bad_number_reports_line() {
        let csv = "RUN,15000,1,75\nRUN,lots,1,75\n";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(err.to_string().contains("'lots'"));
    }

    #[test]
    fn test_csv_missing_type() {
        let csv = ",15000,1,75\n";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing workout type"));
    }

    #[test]
    fn test_load_without_path_uses_reference() {
        let packages = load(&InputConfig::default()).unwrap();
        assert_eq!(packages, reference_packages());
    }

    #[test]
    fn test_load_unknown_extension_needs_format() {
        let input = InputConfig {
            path: Some(PathBuf::from("packages.bin")),
            format: None,
        };
        let err = load(&input).unwrap_err();
        assert!(err.to_string().contains("input.format"));
    }

    #[test]
    fn test_load_missing_file() {
        let input = InputConfig {
            path: Some(PathBuf::from("/nonexistent/workouts.json")),
            format: None,
        };
        assert!(matches!(load(&input), Err(CliError::Io(_))));
    }
}

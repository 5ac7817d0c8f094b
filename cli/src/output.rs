//! Report rendering for stdout

use workout_tracker_shared::WorkoutReport;

use crate::config::OutputFormat;
use crate::error::Result;

/// Render reports in the configured format
///
/// Text output is one summary line per report; JSON output is a single
/// pretty-printed array.
pub fn render(reports: &[WorkoutReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(WorkoutReport::message)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

//! Input validation functions
//!
//! Sensor packages arrive as plain numbers. These checks run before a
//! calculator is constructed so that every calculator holds a usable sample.

/// Validate a measurement that must be a positive, finite number
pub fn validate_positive(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if value <= 0.0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(())
}

/// Validate workout duration (in hours)
///
/// Zero is rejected: mean speed divides by the duration.
pub fn validate_duration_hours(hours: f64) -> Result<(), String> {
    validate_positive(hours)
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    validate_positive(weight_kg)
}

/// Validate walker height
///
/// No unit is assumed: the walking formula takes the height exactly as the
/// sensor reports it.
pub fn validate_height(height: f64) -> Result<(), String> {
    validate_positive(height)
}

/// Validate pool length (in meters)
pub fn validate_pool_length(length_m: f64) -> Result<(), String> {
    validate_positive(length_m)
}

/// Parse a counter (steps, strokes, pool lengths) from a package value
///
/// Counters must be whole, non-negative and fit in a `u32`.
pub fn parse_count(value: f64) -> Result<u32, String> {
    if value.is_nan() || value.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("cannot be negative".to_string());
    }
    if value.fract() != 0.0 {
        return Err("must be a whole number".to_string());
    }
    if value > f64::from(u32::MAX) {
        return Err("is too large".to_string());
    }
    Ok(value as u32)
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "action_count" => "Action Count",
        "duration_hours" => "Duration",
        "weight_kg" => "Weight",
        "height" => "Height",
        "pool_length_m" => "Pool Length",
        "pool_lengths_count" => "Pool Lengths",
        "calories" => "Calories",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Attach a field name to a bare validation result
pub fn check_field<T>(field: &str, result: Result<T, String>) -> Result<T, ValidationError> {
    result.map_err(|message| ValidationError::new(field, &message))
}

//! Workout metric calculators
//!
//! Provides distance, mean speed and calorie calculations for running,
//! sports walking and swimming sessions recorded by a motion sensor.
//!
//! Every calculator implements [`Training`]. Distance and mean speed have
//! provided implementations; the calorie formula is required, so a workout
//! without one cannot be built.

use crate::calibration::Calibration;
use crate::dispatcher::WorkoutKind;
use crate::report::WorkoutReport;
use crate::validation::{
    check_field, validate_duration_hours, validate_height, validate_pool_length,
    validate_weight, ValidationError,
};

const CALIBRATION: Calibration = Calibration::STANDARD;

// ============================================================================
// Common Sample
// ============================================================================

/// Readings shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSample {
    /// Steps or strokes counted by the sensor
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl WorkoutSample {
    /// Build a sample, rejecting durations that would make the mean speed undefined
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, ValidationError> {
        check_field("duration_hours", validate_duration_hours(duration_hours))?;
        check_field("weight_kg", validate_weight(weight_kg))?;
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }
}

/// Reject readings whose derived metrics overflow
///
/// A positive but vanishingly small duration (or an extreme reading) can
/// still push mean speed or calories to infinity. Such samples are refused
/// so that every report carries finite numbers.
fn ensure_finite_metrics<T: Training>(workout: T) -> Result<T, ValidationError> {
    if !workout.mean_speed_kmh().is_finite() {
        return Err(ValidationError::new(
            "duration_hours",
            "is too short for the recorded distance",
        ));
    }
    if !workout.spent_calories().is_finite() {
        return Err(ValidationError::new(
            "calories",
            "cannot be estimated from these readings",
        ));
    }
    Ok(workout)
}

// ============================================================================
// Calculator Contract
// ============================================================================

/// Metric calculator for a single workout
pub trait Training {
    /// Which workout kind this calculator handles
    fn kind(&self) -> WorkoutKind;

    fn sample(&self) -> &WorkoutSample;

    /// Meters covered per counted action
    fn step_length_m(&self) -> f64;

    /// Distance covered, in km
    fn distance_km(&self) -> f64 {
        f64::from(self.sample().action_count) * self.step_length_m() / CALIBRATION.m_in_km
    }

    /// Mean speed over the whole session, in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.sample().duration_hours
    }

    /// Energy spent, in kcal. Not clamped; low-intensity sessions may yield
    /// zero or negative values.
    fn spent_calories(&self) -> f64;

    /// Collect the derived metrics into a report
    fn report(&self) -> WorkoutReport {
        WorkoutReport {
            type_name: self.kind().display_name().to_string(),
            duration_hours: self.sample().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

// ============================================================================
// Running
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    sample: WorkoutSample,
}

impl Running {
    pub fn new(sample: WorkoutSample) -> Result<Self, ValidationError> {
        ensure_finite_metrics(Self { sample })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn step_length_m(&self) -> f64 {
        CALIBRATION.running.step_length_m
    }

    fn spent_calories(&self) -> f64 {
        let c = &CALIBRATION.running;
        (c.speed_multiplier * self.mean_speed_kmh() - c.speed_shift) * self.sample.weight_kg
            / CALIBRATION.m_in_km
            * self.sample.duration_hours
            * CALIBRATION.min_in_hour
    }
}

// ============================================================================
// Sports Walking
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    sample: WorkoutSample,
    /// Walker height exactly as reported by the sensor
    height: f64,
}

impl SportsWalking {
    pub fn new(sample: WorkoutSample, height: f64) -> Result<Self, ValidationError> {
        check_field("height", validate_height(height))?;
        ensure_finite_metrics(Self { sample, height })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn step_length_m(&self) -> f64 {
        CALIBRATION.walking.step_length_m
    }

    /// Squared speed is floor-divided by the raw height in centimeters, so
    /// the speed term stays zero below roughly 13.4 km/h for a 180 cm walker.
    /// Kept as-is for parity with existing sensor reports.
    fn spent_calories(&self) -> f64 {
        let c = &CALIBRATION.walking;
        let speed_term = (self.mean_speed_kmh().powi(2) / self.height).floor();
        (c.weight_multiplier * self.sample.weight_kg
            + speed_term * c.speed_height_multiplier * self.sample.weight_kg)
            * self.sample.duration_hours
            * CALIBRATION.min_in_hour
    }
}

// ============================================================================
// Swimming
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    sample: WorkoutSample,
    pool_length_m: f64,
    pool_lengths_count: u32,
}

impl Swimming {
    pub fn new(
        sample: WorkoutSample,
        pool_length_m: f64,
        pool_lengths_count: u32,
    ) -> Result<Self, ValidationError> {
        check_field("pool_length_m", validate_pool_length(pool_length_m))?;
        ensure_finite_metrics(Self {
            sample,
            pool_length_m,
            pool_lengths_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lengths_count(&self) -> u32 {
        self.pool_lengths_count
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn step_length_m(&self) -> f64 {
        CALIBRATION.swimming.stroke_length_m
    }

    /// Speed comes from the pool lengths swum, not from the stroke count
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lengths_count)
            / CALIBRATION.m_in_km
            / self.sample.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        let c = &CALIBRATION.swimming;
        (self.mean_speed_kmh() + c.speed_shift) * c.weight_multiplier * self.sample.weight_kg
    }
}

// ============================================================================
// Tagged Workout
// ============================================================================

/// A constructed calculator of any supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.inner().kind()
    }

    fn sample(&self) -> &WorkoutSample {
        self.inner().sample()
    }

    fn step_length_m(&self) -> f64 {
        self.inner().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.inner().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

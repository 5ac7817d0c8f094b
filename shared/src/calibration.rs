//! Calibration coefficients for the workout formulas
//!
//! The calorie formulas are empirical regressions; their coefficients are
//! fixed and must be reproduced exactly for output parity. They are grouped
//! here per workout kind instead of being scattered across the calculators.

use crate::errors::CalibrationError;

/// Coefficients for the running formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCoefficients {
    /// Meters covered per step
    pub step_length_m: f64,
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

/// Coefficients for the sports walking formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingCoefficients {
    /// Meters covered per step
    pub step_length_m: f64,
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
}

/// Coefficients for the swimming formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingCoefficients {
    /// Meters covered per stroke
    pub stroke_length_m: f64,
    pub speed_shift: f64,
    pub weight_multiplier: f64,
}

/// Complete calibration record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub m_in_km: f64,
    pub min_in_hour: f64,
    pub running: RunningCoefficients,
    pub walking: WalkingCoefficients,
    pub swimming: SwimmingCoefficients,
}

impl Calibration {
    /// The coefficients every calculator uses
    pub const STANDARD: Calibration = Calibration {
        m_in_km: 1000.0,
        min_in_hour: 60.0,
        running: RunningCoefficients {
            step_length_m: 0.65,
            speed_multiplier: 18.0,
            speed_shift: 20.0,
        },
        walking: WalkingCoefficients {
            step_length_m: 0.65,
            weight_multiplier: 0.035,
            speed_height_multiplier: 0.029,
        },
        swimming: SwimmingCoefficients {
            stroke_length_m: 1.38,
            speed_shift: 1.1,
            weight_multiplier: 2.0,
        },
    };

    /// Check that every coefficient is usable
    ///
    /// All values must be finite; step lengths and unit divisors must be
    /// strictly positive.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        let positive = [
            ("m_in_km", self.m_in_km),
            ("min_in_hour", self.min_in_hour),
            ("running.step_length_m", self.running.step_length_m),
            ("walking.step_length_m", self.walking.step_length_m),
            ("swimming.stroke_length_m", self.swimming.stroke_length_m),
        ];
        let finite = [
            ("running.speed_multiplier", self.running.speed_multiplier),
            ("running.speed_shift", self.running.speed_shift),
            ("walking.weight_multiplier", self.walking.weight_multiplier),
            (
                "walking.speed_height_multiplier",
                self.walking.speed_height_multiplier,
            ),
            ("swimming.speed_shift", self.swimming.speed_shift),
            ("swimming.weight_multiplier", self.swimming.weight_multiplier),
        ];

        for &(name, value) in positive.iter().chain(finite.iter()) {
            if !value.is_finite() {
                return Err(CalibrationError::NotFinite { name, value });
            }
        }
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(CalibrationError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_valid() {
        assert!(Calibration::STANDARD.validate().is_ok());
        assert_eq!(Calibration::default(), Calibration::STANDARD);
    }

    #[test]
    fn test_reference_coefficients() {
        let c = Calibration::STANDARD;
        assert_eq!(c.running.step_length_m, 0.65);
        assert_eq!(c.walking.step_length_m, 0.65);
        assert_eq!(c.swimming.stroke_length_m, 1.38);
        assert_eq!(c.running.speed_multiplier, 18.0);
        assert_eq!(c.running.speed_shift, 20.0);
        assert_eq!(c.walking.weight_multiplier, 0.035);
        assert_eq!(c.walking.speed_height_multiplier, 0.029);
        assert_eq!(c.swimming.speed_shift, 1.1);
        assert_eq!(c.swimming.weight_multiplier, 2.0);
    }

    #[test]
    fn test_zero_step_length_rejected() {
        let mut c = Calibration::STANDARD;
        c.swimming.stroke_length_m = 0.0;
        assert_eq!(
            c.validate(),
            Err(CalibrationError::NotPositive {
                name: "swimming.stroke_length_m",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_non_finite_coefficient_rejected() {
        let mut c = Calibration::STANDARD;
        c.running.speed_shift = f64::NAN;
        let err = c.validate().unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::NotFinite {
                name: "running.speed_shift",
                ..
            }
        ));
    }
}

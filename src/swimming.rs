//! Pool swimming workouts
//!
//! Speed comes from the pool geometry rather than the stroke count: the
//! sensor counts strokes, but lengths swum are what the athlete reports.

use crate::error::RecordError;
use crate::metrics::{
    M_IN_KM, STROKE_LENGTH_M, SWM_CALORIES_SPEED_SHIFT, SWM_CALORIES_WEIGHT_MULTIPLIER,
};
use crate::models::WorkoutKind;
use crate::training::{ensure_positive, Training, TrainingBase};

/// Pool swimming session measured in strokes
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    /// Pool length in meters
    pool_length: f64,
    /// Number of pool lengths swum
    pool_count: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_count: u32,
    ) -> Result<Self, RecordError> {
        let base = TrainingBase::new(action, duration, weight)?;
        let pool_length = ensure_positive("pool_length", pool_length)?;
        if pool_count == 0 {
            return Err(RecordError::non_positive("pool_count", 0.0));
        }

        Ok(Self {
            base,
            pool_length,
            pool_count,
        })
    }

    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub fn pool_count(&self) -> u32 {
        self.pool_count
    }

    /// Distance from pool lengths, in kilometers
    pub fn pool_distance(&self) -> f64 {
        self.pool_length * f64::from(self.pool_count) / M_IN_KM
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn step_length(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed(&self) -> f64 {
        self.pool_distance() / self.base.duration
    }

    /// `(speed + 1.1) * 2 * weight`
    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWM_CALORIES_SPEED_SHIFT)
            * SWM_CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_session() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();

        assert_close(swimming.distance(), 0.9936);
        assert_close(swimming.mean_speed(), 1.0);
        assert_close(swimming.spent_calories(), 336.0);
    }

    #[test]
    fn test_speed_ignores_stroke_distance() {
        // Same pool work with twice the strokes: distance doubles, speed does not
        let a = Swimming::new(500, 1.0, 70.0, 50.0, 20).unwrap();
        let b = Swimming::new(1000, 1.0, 70.0, 50.0, 20).unwrap();

        assert_close(b.distance(), 2.0 * a.distance());
        assert_close(a.mean_speed(), b.mean_speed());
        assert_close(a.spent_calories(), b.spent_calories());
    }

    #[test]
    fn test_rejects_empty_pool() {
        let err = Swimming::new(720, 1.0, 80.0, 25.0, 0).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidArgumentValue { field: "pool_count", .. }
        ));

        let err = Swimming::new(720, 1.0, 80.0, -25.0, 40).unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidArgumentValue { field: "pool_length", .. }
        ));
    }

    #[test]
    fn test_accessors() {
        let swimming = Swimming::new(720, 2.0, 80.0, 25.0, 40).unwrap();
        assert_eq!(swimming.pool_length(), 25.0);
        assert_eq!(swimming.pool_count(), 40);
        assert_close(swimming.pool_distance(), 1.0);
        assert_close(swimming.mean_speed(), 0.5);
    }
}

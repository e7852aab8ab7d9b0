//! Running workouts

use crate::error::RecordError;
use crate::metrics::{M_IN_KM, RUN_CALORIES_SPEED_MULTIPLIER, RUN_CALORIES_SPEED_SHIFT};
use crate::models::WorkoutKind;
use crate::training::{Training, TrainingBase};

/// Running session measured in steps
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, RecordError> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    /// `(18 * speed - 20) * weight / 1000 * minutes`
    fn spent_calories(&self) -> f64 {
        (RUN_CALORIES_SPEED_MULTIPLIER * self.mean_speed() - RUN_CALORIES_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration_minutes()
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
        let running = Running::new(15000, 1.0, 75.0).unwrap();

        assert_close(running.distance(), 9.75);
        assert_close(running.mean_speed(), 9.75);
        assert_close(running.spent_calories(), 699.75);
    }

    #[test]
    fn test_half_hour_session() {
        // 6000 steps in 30 minutes -> 3.9 km at 7.8 km/h
        let running = Running::new(6000, 0.5, 60.0).unwrap();

        assert_close(running.distance(), 3.9);
        assert_close(running.mean_speed(), 7.8);
        assert_close(running.spent_calories(), (18.0 * 7.8 - 20.0) * 60.0 / 1000.0 * 30.0);
    }

    #[test]
    fn test_slow_pace_yields_negative_energy() {
        // Below ~1.1 km/h the linear model drops under zero; the formula is kept as is
        let running = Running::new(100, 1.0, 70.0).unwrap();
        assert!(running.spent_calories() < 0.0);
    }

    #[test]
    fn test_rejects_zero_duration() {
        assert!(Running::new(15000, 0.0, 75.0).is_err());
    }
}

//! Sports walking workouts

use crate::error::RecordError;
use crate::metrics::{WLK_CALORIES_SPEED_HEIGHT_MULTIPLIER, WLK_CALORIES_WEIGHT_MULTIPLIER};
use crate::models::WorkoutKind;
use crate::training::{ensure_positive, Training, TrainingBase};

/// Sports walking session; the calorie model also depends on athlete height
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    /// Athlete height in centimeters
    height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self, RecordError> {
        let base = TrainingBase::new(action, duration, weight)?;
        let height = ensure_positive("height", height)?;
        Ok(Self { base, height })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    /// `(0.035 * weight + (speed² // height) * 0.029 * weight) * minutes`
    ///
    /// The speed term is floor-divided by height, matching the reference
    /// figures; it only contributes once speed² reaches the height value.
    fn spent_calories(&self) -> f64 {
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (WLK_CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + speed_term * WLK_CALORIES_SPEED_HEIGHT_MULTIPLIER * self.base.weight)
            * self.base.duration_minutes()
    }
}

/// Floored float division that takes the floor of the exact quotient.
///
/// `a.div_euclid(b)` floors the already rounded `a / b`, so `1.0 / 0.1`
/// yields 10. Here the quotient is rebuilt from the remainder first, giving 9.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

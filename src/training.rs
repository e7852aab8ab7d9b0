//! Shared training record and the capability every workout type implements
//!
//! The concrete formulas live in `running`, `walking` and `swimming`; this
//! module only holds what they have in common plus the `Workout` union the
//! dispatcher hands out.

use crate::error::RecordError;
use crate::metrics::{M_IN_KM, STEP_LENGTH_M};
use crate::models::{Summary, WorkoutKind};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;

/// Raw sensor values every workout type carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Motion units counted by the sensor (steps or strokes)
    pub action: u32,
    /// Session length in hours
    pub duration: f64,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl TrainingBase {
    /// Validates that duration and weight are finite and strictly positive
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, RecordError> {
        ensure_positive("duration", duration)?;
        ensure_positive("weight", weight)?;

        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    /// Session length in minutes
    pub fn duration_minutes(&self) -> f64 {
        self.duration * crate::metrics::MIN_IN_H
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, RecordError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RecordError::non_positive(field, value))
    }
}

/// Computation interface shared by all workout types.
///
/// `TrainingBase` deliberately does not implement it: a record without a
/// calorie formula cannot be summarised.
pub trait Training {
    /// Shared sensor values
    fn base(&self) -> &TrainingBase;

    /// Workout type, used for the summary label
    fn kind(&self) -> WorkoutKind;

    /// Distance covered per action, in meters
    fn step_length(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.base().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Energy spent in kcal
    fn spent_calories(&self) -> f64;

    /// Collect the computed figures for reporting
    fn summary(&self) -> Summary {
        Summary {
            kind: self.kind(),
            duration: self.base().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// A validated workout of any supported type
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn step_length(&self) -> f64 {
        self.as_training().step_length()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Workout::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Workout::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Workout::Swimming(workout)
    }
}

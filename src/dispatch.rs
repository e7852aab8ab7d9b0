//! Turns raw sensor packages into validated workouts

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RecordError;
use crate::models::{SensorPackage, WorkoutKind};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Workout;
use crate::walking::SportsWalking;

/// What to do with a workout code outside RUN/WLK/SWM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCodePolicy {
    /// Reject the package with `InvalidWorkoutType`
    #[default]
    Strict,
    /// Treat the package as sports walking
    FallbackWalking,
}

impl std::str::FromStr for UnknownCodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(UnknownCodePolicy::Strict),
            "fallback-walking" | "fallback" => Ok(UnknownCodePolicy::FallbackWalking),
            _ => Err(format!("Invalid unknown-code policy: {}", s)),
        }
    }
}

/// Resolve a workout code under the given policy
pub fn resolve_kind(code: &str, policy: UnknownCodePolicy) -> Result<WorkoutKind, RecordError> {
    match (WorkoutKind::from_code(code), policy) {
        (Some(kind), _) => Ok(kind),
        (None, UnknownCodePolicy::FallbackWalking) => {
            warn!(code, "Unknown workout code, treating as sports walking");
            Ok(WorkoutKind::SportsWalking)
        }
        (None, UnknownCodePolicy::Strict) => Err(RecordError::InvalidWorkoutType {
            code: code.to_string(),
        }),
    }
}

/// Build a workout from a code and positional sensor values.
///
/// Value order follows `WorkoutKind::argument_names`.
pub fn read_package(
    code: &str,
    data: &[f64],
    policy: UnknownCodePolicy,
) -> Result<Workout, RecordError> {
    let kind = resolve_kind(code, policy)?;

    if data.len() != kind.arity() {
        return Err(RecordError::InvalidArgumentCount {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let action = as_count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action, duration, weight)?.into(),
        WorkoutKind::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
        WorkoutKind::Swimming => {
            let pool_count = as_count("pool_count", data[4])?;
            Swimming::new(action, duration, weight, data[3], pool_count)?.into()
        }
    };

    debug!(code, ?kind, "Sensor package accepted");
    Ok(workout)
}

/// Convenience wrapper over `read_package` for an owned package
pub fn read_sensor_package(
    package: &SensorPackage,
    policy: UnknownCodePolicy,
) -> Result<Workout, RecordError> {
    read_package(&package.code, &package.data, policy)
}

/// Reference batch the command line runs when no input is given
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn as_count(field: &'static str, value: f64) -> Result<u32, RecordError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(RecordError::not_a_count(field, value))
    }
}

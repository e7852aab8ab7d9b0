use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of decimal places every reported figure is rounded to
pub const REPORT_DECIMALS: u32 = 3;

/// Workout types recognised by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter code sent by the sensor block
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Resolve a sensor code. Matching is exact after trimming whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Label used in the textual summary
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional argument names, in the order sensors report them
    pub fn argument_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &["action", "duration", "weight", "pool_length", "pool_count"],
        }
    }

    pub fn arity(&self) -> usize {
        self.argument_names().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One raw reading as delivered by the sensor block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout type code (RUN, WLK, SWM)
    pub code: String,

    /// Positional values in the order required by the workout type
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

/// Computed statistics for a single workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Workout type
    #[serde(rename = "training_type")]
    pub kind: WorkoutKind,

    /// Duration in hours
    #[serde(serialize_with = "serialize_rounded")]
    pub duration: f64,

    /// Distance in kilometers
    #[serde(serialize_with = "serialize_rounded")]
    pub distance: f64,

    /// Mean speed in km/h
    #[serde(serialize_with = "serialize_rounded")]
    pub speed: f64,

    /// Energy spent in kcal
    #[serde(serialize_with = "serialize_rounded")]
    pub calories: f64,
}

/// Round a computed figure to the report precision.
///
/// Uses the exact binary value of the float and banker's rounding, so the
/// result agrees with `format!("{:.3}", value)`. Returns `None` for NaN and
/// infinities.
pub fn round_for_report(value: f64) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(REPORT_DECIMALS, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(REPORT_DECIMALS);
    Some(rounded)
}

fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match round_for_report(*value) {
        // Decimal has an inherent `serialize` returning raw bytes
        Some(rounded) => Serialize::serialize(&rounded, serializer),
        None => serializer.serialize_f64(*value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_code_lookup() {
        assert_eq!(WorkoutKind::from_code("RUN"), Some(WorkoutKind::Running));
        assert_eq!(WorkoutKind::from_code(" WLK "), Some(WorkoutKind::SportsWalking));
        assert_eq!(WorkoutKind::from_code("SWM"), Some(WorkoutKind::Swimming));
        assert_eq!(WorkoutKind::from_code("run"), None);
        assert_eq!(WorkoutKind::from_code("XYZ"), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_round_for_report() {
        assert_eq!(round_for_report(0.9936), Some(dec!(0.994)));
        assert_eq!(round_for_report(336.0).unwrap().to_string(), "336.000");
        assert_eq!(round_for_report(0.0625), Some(dec!(0.062)));
        assert_eq!(round_for_report(f64::NAN), None);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = Summary {
            kind: WorkoutKind::Swimming,
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["training_type"], "Swimming");
        assert_eq!(json["distance"], "0.994");
        assert_eq!(json["calories"], "336.000");
    }

    #[test]
    fn test_summary_fields_are_rounded_strings() {
        let summary = Summary {
            kind: WorkoutKind::SportsWalking,
            duration: 1.0,
            distance: 5.85,
            speed: 0.0625,
            calories: 157.5,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"training_type":"SportsWalking","duration":"1.000","distance":"5.850","speed":"0.062","calories":"157.500"}"#
        );
    }
}

//! Conversion factors and formula coefficients shared by every workout type.
//!
//! All values are plain `f64` constants so the formulas in the variant
//! modules read the same as their textbook definitions.

/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by a single step, in meters (running and walking)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by a single swimming stroke, in meters
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie formula: `(MULTIPLIER * speed - SHIFT) * weight`
pub const RUN_CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Sports walking calorie formula coefficients
pub const WLK_CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WLK_CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Swimming calorie formula: `(speed + SHIFT) * MULTIPLIER * weight`
pub const SWM_CALORIES_SPEED_SHIFT: f64 = 1.1;
pub const SWM_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

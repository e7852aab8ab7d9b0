//! Unified error hierarchy for workoutrs
//!
//! Record-level failures are kept separate from batch-level failures so a bad
//! reading never takes the rest of a batch down with it.

use std::path::PathBuf;
use thiserror::Error;

use crate::export::ExportError;
use crate::models::WorkoutKind;

/// Top-level error type for all workoutrs operations
#[derive(Debug, Error)]
pub enum WorkoutRsError {
    /// A single sensor package could not be turned into a workout
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Batch input could not be read
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Report could not be rendered or written
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors scoped to one sensor package
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Workout code outside the recognised set
    #[error("Invalid workout type: {code:?}")]
    InvalidWorkoutType { code: String },

    /// Wrong number of positional values for the workout type
    #[error("Invalid argument count for {kind}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A value violates its range or integrality requirement
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidArgumentValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors reading a batch input file
#[derive(Debug, Error)]
pub enum ImportError {
    /// File extension or requested format is not supported
    #[error("Unsupported input format: {format}")]
    UnsupportedFormat { format: String },

    /// File could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is malformed
    #[error("Parse error in {format} at {location}: {reason}")]
    Parse {
        format: &'static str,
        location: String,
        reason: String,
    },
}

/// Result type alias for workoutrs operations
pub type Result<T> = std::result::Result<T, WorkoutRsError>;

impl RecordError {
    pub(crate) fn non_positive(field: &'static str, value: f64) -> Self {
        RecordError::InvalidArgumentValue {
            field,
            value,
            reason: "must be a finite number greater than zero",
        }
    }

    pub(crate) fn not_a_count(field: &'static str, value: f64) -> Self {
        RecordError::InvalidArgumentValue {
            field,
            value,
            reason: "must be a non-negative whole number",
        }
    }
}

impl WorkoutRsError {
    /// Record errors only affect a single entry of a batch
    pub fn is_record_scoped(&self) -> bool {
        matches!(self, WorkoutRsError::Record(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WorkoutRsError::Record(_) => ErrorSeverity::Warning,
            WorkoutRsError::Import(_) => ErrorSeverity::Error,
            WorkoutRsError::Export(_) => ErrorSeverity::Error,
            WorkoutRsError::Configuration(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            WorkoutRsError::Record(RecordError::InvalidWorkoutType { code }) => {
                format!(
                    "Unknown workout type {:?}. Expected one of RUN, WLK or SWM.",
                    code
                )
            }
            WorkoutRsError::Record(RecordError::InvalidArgumentCount {
                kind,
                expected,
                ..
            }) => {
                format!(
                    "{} readings need exactly {} values: {}.",
                    kind,
                    expected,
                    kind.argument_names().join(", ")
                )
            }
            WorkoutRsError::Import(ImportError::Read { path, .. }) => {
                format!("Could not read workout file: {}", path.display())
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Nothing sensible can run without user intervention
    Critical,
    /// Operation failed
    Error,
    /// Only part of the work was skipped
    Warning,
}

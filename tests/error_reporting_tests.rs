//! Integration tests for error reporting across the batch pipeline
//!
//! Covers how record failures surface through the batch report, the
//! umbrella error type and the JSON output.

use workoutrs::error::ErrorSeverity;
use workoutrs::export::{self, Language, OutputFormat};
use workoutrs::import::{self, InputFormat};
use workoutrs::{BatchRunner, ImportError, RecordError, SensorPackage, WorkoutKind, WorkoutRsError};

fn failing_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, -180.0]),
        SensorPackage::new("SWM", vec![720.5, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("BIKE", vec![1.0, 1.0, 1.0]),
    ]
}

#[test]
fn test_each_error_kind_is_reported() {
    let report = BatchRunner::default().run(&failing_packages());
    let errors: Vec<&RecordError> = report.errors().map(|(_, _, e)| e).collect();

    assert_eq!(errors.len(), 4);
    assert_eq!(
        errors[0],
        &RecordError::InvalidArgumentCount {
            kind: WorkoutKind::Running,
            expected: 3,
            actual: 2,
        }
    );
    assert!(matches!(
        errors[1],
        RecordError::InvalidArgumentValue { field: "height", .. }
    ));
    assert!(matches!(
        errors[2],
        RecordError::InvalidArgumentValue { field: "action", .. }
    ));
    assert!(matches!(errors[3], RecordError::InvalidWorkoutType { code } if code == "BIKE"));
}

#[test]
fn test_record_errors_are_warnings() {
    let report = BatchRunner::default().run(&failing_packages());

    for (_, _, error) in report.errors() {
        let error = WorkoutRsError::from(error.clone());
        assert!(error.is_record_scoped());
        assert_eq!(error.severity(), ErrorSeverity::Warning);
        assert!(!error.user_message().is_empty());
    }
}

#[test]
fn test_json_report_carries_error_messages() {
    let report = BatchRunner::default().run(&failing_packages());
    let json = export::render_report(&report, OutputFormat::Json, Language::English).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    for entry in entries {
        assert!(entry.get("summary").is_none());
        assert!(entry["error"].is_string());
    }
    assert_eq!(
        entries[3]["error"],
        "Invalid workout type: \"BIKE\""
    );
}

#[test]
fn test_text_report_omits_failed_records() {
    let report = BatchRunner::default().run(&failing_packages());
    let text = export::render_report(&report, OutputFormat::Text, Language::English).unwrap();
    assert!(text.is_empty());
}

#[test]
fn test_malformed_csv_fails_whole_file() {
    let err = import::parse_packages("RUN,15000,1,heavy\n", InputFormat::Csv).unwrap_err();
    assert!(matches!(err, ImportError::Parse { format: "CSV", .. }));

    let err = WorkoutRsError::from(err);
    assert!(!err.is_record_scoped());
    assert_eq!(err.severity(), ErrorSeverity::Error);
}

use super::ExportError;
use crate::batch::BatchReport;
use crate::models::round_for_report;

const HEADER: [&str; 8] = [
    "index",
    "code",
    "training_type",
    "duration_h",
    "distance_km",
    "speed_kmh",
    "calories",
    "error",
];

fn rounded(value: f64) -> String {
    round_for_report(value).map_or_else(|| value.to_string(), |v| v.to_string())
}

/// Render every outcome as CSV; failed rows leave the numeric columns empty
pub fn render_report(report: &BatchReport) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let csv_err = |e: csv::Error| ExportError::SerializationError(e.to_string());

    writer.write_record(HEADER).map_err(csv_err)?;

    for outcome in &report.outcomes {
        let index = outcome.index.to_string();
        let row = match &outcome.result {
            Ok(summary) => [
                index,
                outcome.code.clone(),
                summary.kind.label().to_string(),
                rounded(summary.duration),
                rounded(summary.distance),
                rounded(summary.speed),
                rounded(summary.calories),
                String::new(),
            ],
            Err(e) => [
                index,
                outcome.code.clone(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                e.to_string(),
            ],
        };
        writer.write_record(&row).map_err(csv_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::SerializationError(e.to_string()))
}

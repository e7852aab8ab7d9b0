use serde::Serialize;

use super::ExportError;
use crate::batch::{BatchReport, RecordOutcome};
use crate::models::Summary;

/// JSON shape of a single batch entry
#[derive(Debug, Serialize)]
struct RecordView<'a> {
    index: usize,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a RecordOutcome> for RecordView<'a> {
    fn from(outcome: &'a RecordOutcome) -> Self {
        Self {
            index: outcome.index,
            code: &outcome.code,
            summary: outcome.result.as_ref().ok(),
            error: outcome.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Render every outcome, successful or not, as a pretty-printed JSON array
pub fn render_report(report: &BatchReport) -> Result<String, ExportError> {
    let views: Vec<RecordView<'_>> = report.outcomes.iter().map(RecordView::from).collect();

    let mut json = serde_json::to_string_pretty(&views)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

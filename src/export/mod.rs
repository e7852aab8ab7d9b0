use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::batch::BatchReport;

pub mod csv;
pub mod json;
pub mod text;

pub use text::Language;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary sentence per workout
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Render a batch report in the requested format
pub fn render_report(
    report: &BatchReport,
    format: OutputFormat,
    language: Language,
) -> Result<String, ExportError> {
    match format {
        OutputFormat::Text => Ok(text::render_report(report, language)),
        OutputFormat::Json => json::render_report(report),
        OutputFormat::Csv => csv::render_report(report),
    }
}

/// Render a batch report and write it to `writer`
pub fn write_report<W: Write>(
    report: &BatchReport,
    format: OutputFormat,
    language: Language,
    mut writer: W,
) -> Result<(), ExportError> {
    let rendered = render_report(report, format, language)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render a batch report into a file, creating parent directories as needed
pub fn export_report<P: AsRef<Path>>(
    report: &BatchReport,
    format: OutputFormat,
    language: Language,
    output_path: P,
) -> Result<(), ExportError> {
    if let Some(parent) = output_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(output_path)?;
    write_report(report, format, language, file)
}

use crate::error::ImportError;
use crate::models::SensorPackage;

/// Parse a JSON array of `{"code": "...", "data": [...]}` objects
pub fn parse_packages(content: &str) -> Result<Vec<SensorPackage>, ImportError> {
    serde_json::from_str(content).map_err(|e| ImportError::Parse {
        format: "JSON",
        location: format!("line {}, column {}", e.line(), e.column()),
        reason: e.to_string(),
    })
}

//! Reading batches of sensor packages from files

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ImportError;
use crate::models::SensorPackage;

pub mod csv;
pub mod json;

/// Supported batch file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Guess the format from the file extension
    pub fn detect(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        extension.parse()
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Csv => "CSV",
            InputFormat::Json => "JSON",
        }
    }
}

impl std::str::FromStr for InputFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" | "txt" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            _ => Err(ImportError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Parse sensor packages from in-memory content
pub fn parse_packages(content: &str, format: InputFormat) -> Result<Vec<SensorPackage>, ImportError> {
    match format {
        InputFormat::Csv => csv::parse_packages(content),
        InputFormat::Json => json::parse_packages(content),
    }
}

/// Read sensor packages from a file, detecting the format when none is given
pub fn read_packages(path: &Path, format: Option<InputFormat>) -> Result<Vec<SensorPackage>, ImportError> {
    let format = match format {
        Some(format) => format,
        None => InputFormat::detect(path)?,
    };

    let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let packages = parse_packages(&content, format)?;
    info!(
        path = %path.display(),
        format = format.name(),
        packages = packages.len(),
        "Loaded sensor packages"
    );

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            InputFormat::detect(&PathBuf::from("week.csv")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::detect(&PathBuf::from("week.JSON")).unwrap(),
            InputFormat::Json
        );
        assert!(matches!(
            InputFormat::detect(&PathBuf::from("week.fit")),
            Err(ImportError::UnsupportedFormat { .. })
        ));
        assert!(InputFormat::detect(&PathBuf::from("week")).is_err());
    }

    #[test]
    fn test_read_packages_from_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "RUN,15000,1,75").unwrap();
        writeln!(file, "WLK,9000,1,75,180").unwrap();

        let packages = read_packages(file.path(), None).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].code, "WLK");
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, r#"[{{"code": "RUN", "data": [15000, 1, 75]}}]"#).unwrap();

        let packages = read_packages(file.path(), Some(InputFormat::Json)).unwrap();
        assert_eq!(packages, vec![SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_packages(Path::new("/nonexistent/batch.csv"), None).unwrap_err();
        assert!(matches!(err, ImportError::Read { .. }));
    }
}

//! CSV batch input: `CODE,value,value,...` per row
//!
//! Rows may have different lengths. An optional header row (first cell
//! `code`) and `#` comment lines are skipped.

use csv::{ReaderBuilder, Trim};

use crate::error::ImportError;
use crate::models::SensorPackage;

const FORMAT: &str = "CSV";

pub fn parse_packages(content: &str) -> Result<Vec<SensorPackage>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut packages = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ImportError::Parse {
            format: FORMAT,
            location: format!("row {}", row + 1),
            reason: e.to_string(),
        })?;

        let line = record
            .position()
            .map_or(row as u64 + 1, |p| p.line());

        let Some(code) = record.get(0) else {
            continue;
        };
        if code.is_empty() && record.len() == 1 {
            continue;
        }
        if row == 0 && code.eq_ignore_ascii_case("code") {
            continue;
        }

        let data = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(column, cell)| {
                cell.parse::<f64>().map_err(|_| ImportError::Parse {
                    format: FORMAT,
                    location: format!("line {}, column {}", line, column + 2),
                    reason: format!("not a number: {:?}", cell),
                })
            })
            .collect::<Result<Vec<f64>, ImportError>>()?;

        packages.push(SensorPackage::new(code, data));
    }

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_of_varying_length() {
        let content = "SWM,720,1,80,25,40\nRUN,15000,1,75\nWLK,9000,1,75,180\n";
        let packages = parse_packages(content).unwrap();

        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0], SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]));
        assert_eq!(packages[1].data.len(), 3);
        assert_eq!(packages[2].data, vec![9000.0, 1.0, 75.0, 180.0]);
    }

    #[test]
    fn test_header_comments_and_whitespace() {
        let content = "code,action,duration,weight\n# morning session\n RUN , 15000 , 1.5 , 75\n\n";
        let packages = parse_packages(content).unwrap();

        assert_eq!(packages, vec![SensorPackage::new("RUN", vec![15000.0, 1.5, 75.0])]);
    }

    #[test]
    fn test_unknown_codes_are_kept_for_dispatch() {
        let packages = parse_packages("XYZ,1,2,3").unwrap();
        assert_eq!(packages[0].code, "XYZ");
    }

    #[test]
    fn test_non_numeric_value() {
        let err = parse_packages("RUN,15000,one,75").unwrap_err();
        match err {
            ImportError::Parse { location, reason, .. } => {
                assert_eq!(location, "line 1, column 3");
                assert!(reason.contains("\"one\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

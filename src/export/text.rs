use serde::{Deserialize, Serialize};
use std::fmt;

use crate::batch::BatchReport;
use crate::models::Summary;

/// Language of the summary sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            _ => Err(format!("Invalid language: {}", s)),
        }
    }
}

/// Render the one-line summary of a workout
pub fn format_summary(summary: &Summary, language: Language) -> String {
    match language {
        Language::English => format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            summary.kind.label(),
            summary.duration,
            summary.distance,
            summary.speed,
            summary.calories
        ),
        Language::Russian => format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            summary.kind.label(),
            summary.duration,
            summary.distance,
            summary.speed,
            summary.calories
        ),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_summary(self, Language::English))
    }
}

/// One line per successful workout, in input order. Failures are left to the caller.
pub fn render_report(report: &BatchReport, language: Language) -> String {
    let mut out = String::new();
    for summary in report.summaries() {
        out.push_str(&format_summary(summary, language));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutKind;

    fn swim_summary() -> Summary {
        Summary {
            kind: WorkoutKind::Swimming,
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_english_template() {
        assert_eq!(
            format_summary(&swim_summary(), Language::English),
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg. speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_display_matches_english() {
        let summary = swim_summary();
        assert_eq!(summary.to_string(), format_summary(&summary, Language::English));
    }

    #[test]
    fn test_russian_template() {
        assert_eq!(
            format_summary(&swim_summary(), Language::Russian),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_three_decimals_on_long_fractions() {
        let summary = Summary {
            kind: WorkoutKind::Running,
            duration: 1.0 / 3.0,
            distance: 2.0 / 3.0,
            speed: 2.0,
            calories: 0.0004,
        };
        let line = format_summary(&summary, Language::English);

        assert!(line.contains("Duration: 0.333 h."));
        assert!(line.contains("Distance: 0.667 km"));
        assert!(line.contains("Avg. speed: 2.000 km/h"));
        assert!(line.contains("Calories burned: 0.000."));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Russian);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!("de".parse::<Language>().is_err());
    }
}

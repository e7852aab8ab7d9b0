//! Batch processing of sensor packages
//!
//! Every package is handled on its own: a failure is recorded against that
//! package and the batch moves on unless fail-fast was requested.

use tracing::{debug, info, info_span, warn};

use crate::dispatch::{read_sensor_package, UnknownCodePolicy};
use crate::error::RecordError;
use crate::models::{SensorPackage, Summary};
use crate::training::Training;

/// Result for one package of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// Position of the package in the input, starting at 0
    pub index: usize,
    /// Workout code as received
    pub code: String,
    pub result: Result<Summary, RecordError>,
}

/// Ordered outcomes of a batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
    /// Set when fail-fast stopped the run before the last package
    pub stopped_early: bool,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// True when every package produced a summary and none were skipped
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && !self.stopped_early
    }

    /// Successful summaries, in input order
    pub fn summaries(&self) -> impl Iterator<Item = &Summary> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failures with their package position and code
    pub fn errors(&self) -> impl Iterator<Item = (usize, &str, &RecordError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.index, o.code.as_str(), e)))
    }
}

/// Runs packages through dispatch and summary
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    policy: UnknownCodePolicy,
    fail_fast: bool,
}

impl BatchRunner {
    pub fn new(policy: UnknownCodePolicy) -> Self {
        Self {
            policy,
            fail_fast: false,
        }
    }

    /// Stop at the first failing package
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Compute the summary of a single package
    pub fn process(&self, package: &SensorPackage) -> Result<Summary, RecordError> {
        read_sensor_package(package, self.policy).map(|workout| workout.summary())
    }

    pub fn run(&self, packages: &[SensorPackage]) -> BatchReport {
        let span = info_span!("batch", records = packages.len(), policy = ?self.policy);
        let _guard = span.enter();

        let mut report = BatchReport::default();

        for (index, package) in packages.iter().enumerate() {
            let result = self.process(package);

            match &result {
                Ok(summary) => debug!(
                    index,
                    code = %package.code,
                    distance = summary.distance,
                    calories = summary.calories,
                    "Workout summarised"
                ),
                Err(e) => warn!(index, code = %package.code, error = %e, "Skipping sensor package"),
            }

            let failed = result.is_err();
            report.outcomes.push(RecordOutcome {
                index,
                code: package.code.clone(),
                result,
            });

            if failed && self.fail_fast {
                report.stopped_early = index + 1 < packages.len();
                break;
            }
        }

        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            stopped_early = report.stopped_early,
            "Batch finished"
        );

        report
    }
}

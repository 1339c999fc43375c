use crate::config::toml_config::BatchConfig;
use crate::core::rules::RuleCheck;
use crate::domain::model::{BatchReport, BatchSummary, CheckOutcome};
use crate::domain::ports::Check;
use crate::utils::error::{Result, StrKitError};
use chrono::Utc;
use std::fs::{self, File};
use std::path::Path;

/// A compiled check bound to the CSV column it reads.
struct ColumnCheck {
    column: String,
    index: usize,
    check: Box<dyn Check>,
}

/// Runs the configured checks over every row of a CSV file and writes a report.
pub struct BatchChecker {
    config: BatchConfig,
}

impl BatchChecker {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn run(&self) -> Result<BatchSummary> {
        tracing::info!("Starting batch check '{}'", self.config.job.name);

        let (rows, outcomes) = self.check_input()?;
        let failures = outcomes.iter().filter(|outcome| !outcome.passed).count();
        tracing::info!(
            "Checked {} rows with {} checks, {} failures",
            rows,
            self.config.checks.len(),
            failures
        );

        let summary = BatchSummary {
            job: self.config.job.name.clone(),
            rows,
            checks: self.config.checks.len(),
            failures,
            output_path: self.config.output.path.clone(),
            generated_at: Utc::now(),
        };

        let outcomes = if self.config.failures_only() {
            outcomes.into_iter().filter(|outcome| !outcome.passed).collect()
        } else {
            outcomes
        };
        self.write_report(&summary, outcomes)?;
        tracing::info!("Report saved to: {}", summary.output_path);

        Ok(summary)
    }

    /// Reads the input and returns the number of data rows and every outcome.
    pub fn check_input(&self) -> Result<(usize, Vec<CheckOutcome>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter()?)
            .has_headers(true)
            .from_path(&self.config.input.path)?;

        let headers = reader.headers()?.clone();
        tracing::debug!("Input columns: {:?}", headers.iter().collect::<Vec<_>>());
        let checks = self.compile_checks(&headers)?;

        let mut rows = 0;
        let mut outcomes = Vec::with_capacity(checks.len());
        for (row_index, record) in reader.records().enumerate() {
            let record = record?;
            rows += 1;

            for column_check in &checks {
                let value = record.get(column_check.index).unwrap_or_default();
                let passed = column_check.check.check(value);
                if !passed {
                    tracing::debug!(
                        "Row {} column '{}' failed {}",
                        row_index + 1,
                        column_check.column,
                        column_check.check.rule()
                    );
                }
                outcomes.push(CheckOutcome {
                    row: row_index + 1,
                    column: column_check.column.clone(),
                    rule: column_check.check.rule(),
                    value: value.to_string(),
                    passed,
                });
            }
        }

        Ok((rows, outcomes))
    }

    fn compile_checks(&self, headers: &csv::StringRecord) -> Result<Vec<ColumnCheck>> {
        self.config
            .checks
            .iter()
            .map(|spec| -> Result<ColumnCheck> {
                let index = headers
                    .iter()
                    .position(|header| header == spec.column)
                    .ok_or_else(|| StrKitError::ConfigValidationError {
                        field: "checks.column".to_string(),
                        message: format!("Column '{}' not found in input headers", spec.column),
                    })?;
                Ok(ColumnCheck {
                    column: spec.column.clone(),
                    index,
                    check: Box::new(RuleCheck::from_spec(spec)?),
                })
            })
            .collect()
    }

    fn write_report(&self, summary: &BatchSummary, outcomes: Vec<CheckOutcome>) -> Result<()> {
        let path = Path::new(&self.config.output.path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        match self.config.output_format() {
            "json" => {
                let report = BatchReport {
                    summary: summary.clone(),
                    outcomes,
                };
                serde_json::to_writer_pretty(File::create(path)?, &report)?;
            }
            _ => {
                let mut writer = csv::Writer::from_path(path)?;
                for outcome in &outcomes {
                    writer.serialize(outcome)?;
                }
                writer.flush()?;
            }
        }

        Ok(())
    }
}

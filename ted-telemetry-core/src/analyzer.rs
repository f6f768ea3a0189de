//! One analysis run over a telemetry log.
//!
//! A run ends in one of three states:
//!
//! ```text
//! load ──► not found ──────────► LogNotFound
//!   │
//!   └────► zero events ────────► NoEvents
//!   │
//!   └────► aggregate ──────────► Report
//! ```

use crate::analytics::{ReportOptions, TelemetryReport};
use crate::error::{Error, Result};
use crate::ingest::load_events;
use std::path::{Path, PathBuf};

/// How an analysis run ended.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// The log file does not exist; nothing was aggregated
    LogNotFound(PathBuf),
    /// The log exists but held no parseable events
    NoEvents {
        path: PathBuf,
        skipped_lines: usize,
    },
    /// Full aggregation completed
    Report(TelemetryReport),
}

/// Loads a telemetry log and aggregates it into a [`TelemetryReport`].
#[derive(Debug, Clone)]
pub struct LogAnalyzer {
    path: PathBuf,
    options: ReportOptions,
}

impl LogAnalyzer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the analysis.
    ///
    /// A missing log is an outcome, not an error. Other I/O failures are
    /// returned as errors.
    pub fn run(&self) -> Result<AnalysisOutcome> {
        let log = match load_events(&self.path) {
            Ok(log) => log,
            Err(Error::LogNotFound { path }) => {
                tracing::warn!(path = %path.display(), "Telemetry log not found");
                return Ok(AnalysisOutcome::LogNotFound(path));
            }
            Err(e) => return Err(e),
        };

        if log.is_empty() {
            tracing::info!(
                path = %self.path.display(),
                skipped = log.skipped_lines,
                "No events in telemetry log"
            );
            return Ok(AnalysisOutcome::NoEvents {
                path: log.path,
                skipped_lines: log.skipped_lines,
            });
        }

        let report = TelemetryReport::from_log(&log, &self.options);

        tracing::info!(
            events = report.total_events,
            sessions = report.unique_sessions,
            "Telemetry report generated"
        );

        Ok(AnalysisOutcome::Report(report))
    }
}

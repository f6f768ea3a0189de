//! Loading the editor's telemetry log
//!
//! The log is newline-delimited JSON: one event object per line, appended by
//! the editor. It is read in full before any aggregation happens.
//!
//! ## Error Handling
//!
//! - **Missing file**: returned as [`Error::LogNotFound`] so callers can report
//!   it without treating it as a failure.
//! - **Blank lines**: ignored and not counted.
//! - **Malformed lines** (invalid JSON, non-object JSON, invalid UTF-8): logged
//!   at debug level with their line number, counted in
//!   [`LoadedLog::skipped_lines`], and skipped. One corrupt line never loses
//!   the rest of the log.
//! - **Other I/O errors** (e.g. the path is a directory): returned as
//!   [`Error::Io`]; reading stops at the first one.

use crate::error::{Error, Result};
use crate::types::Event;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Everything read from one telemetry log.
#[derive(Debug, Default)]
pub struct LoadedLog {
    /// Path the log was read from
    pub path: PathBuf,
    /// Successfully parsed events, in file order
    pub events: Vec<Event>,
    /// Non-blank lines seen
    pub lines_read: usize,
    /// Non-blank lines that did not yield an event
    pub skipped_lines: usize,
    /// When the log was last written, if the platform reports it
    pub modified_at: Option<DateTime<Utc>>,
}

impl LoadedLog {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Read and parse a telemetry log.
pub fn load_events(path: &Path) -> Result<LoadedLog> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::LogNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open {}: {}", path.display(), e),
            )));
        }
    };

    let modified_at = file
        .metadata()
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from);

    let mut log = parse_lines(BufReader::new(file)).map_err(|e| match e {
        Error::Io(io) => Error::Io(std::io::Error::new(
            io.kind(),
            format!("Failed to read {}: {}", path.display(), io),
        )),
        other => other,
    })?;
    log.path = path.to_path_buf();
    log.modified_at = modified_at;

    tracing::info!(
        path = %path.display(),
        events = log.events.len(),
        skipped = log.skipped_lines,
        "Loaded telemetry log"
    );

    Ok(log)
}

/// Parse NDJSON from any buffered reader.
///
/// Lines that are not UTF-8 are skipped like any other malformed line. Every
/// other read error ends parsing and is returned.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<LoadedLog> {
    let mut log = LoadedLog::default();

    for (idx, line_result) in reader.lines().enumerate() {
        let line_number = idx + 1;

        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                log.lines_read += 1;
                log.skipped_lines += 1;
                tracing::debug!(line = line_number, error = %e, "Skipping non-UTF-8 line");
                continue;
            }
            Err(e) => return Err(Error::Io(e)),
        };

        // A leading byte-order mark would otherwise make the first record unparseable
        let line = if line_number == 1 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };

        if line.trim().is_empty() {
            continue;
        }
        log.lines_read += 1;

        match Event::parse_line(line) {
            Ok(event) => log.events.push(event),
            Err(e) => {
                log.skipped_lines += 1;
                tracing::debug!(line = line_number, error = %e, "Skipping malformed telemetry line");
            }
        }
    }

    Ok(log)
}

//! Aggregate statistics over a telemetry log.

use super::ranking::{FrequencyCounter, Ranking};
use crate::ingest::LoadedLog;
use crate::types::{Event, EventKind};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::path::PathBuf;

/// Options that shape a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Number of entries in the file and command rankings
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

/// Statistics derived from the parsed events of one log.
///
/// Only successfully parsed events contribute; skipped lines are reported
/// separately and never counted.
#[derive(Debug, Clone, Default)]
pub struct TelemetryReport {
    /// Where the events came from
    pub log_path: Option<PathBuf>,
    /// When the log was last written
    pub modified_at: Option<DateTime<Utc>>,
    /// Non-blank lines that did not parse
    pub skipped_lines: usize,

    /// Number of parsed events
    pub total_events: usize,
    /// Distinct `sessionId` values; events without one form a single bucket
    pub unique_sessions: usize,
    /// Events per `type`, most frequent first; `None` is a missing tag
    pub event_types: Ranking<Option<String>>,
    /// Number of `file_open` events
    pub file_opens: usize,
    /// Most opened files; `None` counts events with no `payload.name`
    pub top_files: Ranking<Option<String>>,
    /// Characters inserted by `typing` change events
    pub chars_typed: usize,
    /// Number of `command_executed` events
    pub commands_executed: usize,
    /// Most used commands; `None` counts events with no `payload.label`
    pub top_commands: Ranking<Option<String>>,
}

impl TelemetryReport {
    /// Aggregate a set of events in a single pass.
    pub fn from_events(events: &[Event], options: &ReportOptions) -> Self {
        let mut sessions: HashSet<Option<String>> = HashSet::new();
        let mut types: FrequencyCounter<Option<String>> = FrequencyCounter::new();
        let mut files: FrequencyCounter<Option<String>> = FrequencyCounter::new();
        let mut commands: FrequencyCounter<Option<String>> = FrequencyCounter::new();
        let mut chars_typed = 0usize;

        for event in events {
            sessions.insert(event.session_key());
            types.add(event.event_type.clone());

            match event.kind() {
                EventKind::FileOpen => files.add(event.file_name()),
                EventKind::CommandExecuted => commands.add(event.command_label()),
                EventKind::Typing => chars_typed += event.inserted_chars(),
                EventKind::Other => {}
            }
        }

        Self {
            total_events: events.len(),
            unique_sessions: sessions.len(),
            event_types: types.ranked(),
            file_opens: files.total(),
            top_files: files.most_common(options.top_n),
            chars_typed,
            commands_executed: commands.total(),
            top_commands: commands.most_common(options.top_n),
            ..Default::default()
        }
    }

    /// Aggregate a loaded log, keeping its source details for the header.
    pub fn from_log(log: &LoadedLog, options: &ReportOptions) -> Self {
        Self {
            log_path: Some(log.path.clone()),
            modified_at: log.modified_at,
            skipped_lines: log.skipped_lines,
            ..Self::from_events(&log.events, options)
        }
    }
}

//! Text rendering for analysis outcomes.

use crate::analytics::TelemetryReport;
use crate::analyzer::AnalysisOutcome;
use crate::format::{format_relative_time_opt, pluralize};
use crate::types::display_key;
use std::fmt::Write;

/// Closing notes appended to the report.
pub const INTERPRETATION: &str = "\
Interpretation:
This data allows an AI to understand your context.
For example, seeing 'file_open: package.json' followed by 'typing' suggests you are modifying dependencies.
Seeing frequent 'command_executed: git commit' patterns allows the AI to suggest batched commits.
";

/// Rendering switches.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Append the interpretation notes after the report
    pub interpretation: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            interpretation: true,
        }
    }
}

/// Render any outcome as the text printed to stdout.
pub fn render_outcome(outcome: &AnalysisOutcome, options: &RenderOptions) -> String {
    match outcome {
        AnalysisOutcome::LogNotFound(path) => {
            format!("Log file not found at: {}\n", path.display())
        }
        AnalysisOutcome::NoEvents { .. } => "No events found in log.\n".to_string(),
        AnalysisOutcome::Report(report) => render_text(report, options),
    }
}

/// Render a full report.
pub fn render_text(report: &TelemetryReport, options: &RenderOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report, options);
    out
}

fn write_report(
    out: &mut String,
    report: &TelemetryReport,
    options: &RenderOptions,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "--- Telemetry Analysis Report ---")?;
    writeln!(out, "Total Events Captured: {}", report.total_events)?;
    if let Some(path) = &report.log_path {
        writeln!(out, "Log File Location: {}", path.display())?;
        writeln!(
            out,
            "Last Written: {}",
            format_relative_time_opt(report.modified_at)
        )?;
    }
    if report.skipped_lines > 0 {
        writeln!(
            out,
            "Skipped Lines: {} (not valid JSON objects)",
            report.skipped_lines
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Unique Sessions: {}", report.unique_sessions)?;

    writeln!(out)?;
    writeln!(out, "Event Breakdown:")?;
    for entry in &report.event_types {
        writeln!(out, "  - {}: {}", display_key(&entry.key), entry.count)?;
    }

    if !report.top_files.is_empty() {
        writeln!(out)?;
        writeln!(out, "Most Opened Files:")?;
        for entry in &report.top_files {
            writeln!(
                out,
                "  - {}: {}",
                display_key(&entry.key),
                pluralize(entry.count, "time", "times")
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Typing Activity:")?;
    writeln!(out, "  - Total Characters Typed: {}", report.chars_typed)?;

    if !report.top_commands.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top Commands Used:")?;
        for entry in &report.top_commands {
            writeln!(
                out,
                "  - {}: {}",
                display_key(&entry.key),
                pluralize(entry.count, "time", "times")
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "--- End of Report ---")?;

    if options.interpretation {
        writeln!(out)?;
        out.push_str(INTERPRETATION);
    }

    Ok(())
}

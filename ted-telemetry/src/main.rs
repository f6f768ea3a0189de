//! ted-telemetry-report - usage report for the ted editor
//!
//! Reads the editor's local telemetry log and prints session, event, file,
//! typing, and command statistics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ted_telemetry_core::{render_outcome, Config, LogAnalyzer, RenderOptions, ReportOptions};

#[derive(Parser, Debug)]
#[command(name = "ted-telemetry-report")]
#[command(about = "Summarize the ted editor's telemetry log")]
#[command(version)]
struct Args {
    /// Telemetry log to analyze (default: the editor's data directory)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Config file to use instead of ~/.config/ted-telemetry/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of entries in the file and command rankings
    #[arg(long)]
    top: Option<usize>,

    /// Omit the interpretation notes at the end of the report
    #[arg(long)]
    no_interpretation: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    // Initialize logging (to file, stdout carries the report); the report
    // still prints when the state directory is unusable
    let _log_guard = ted_telemetry_core::logging::init(&config.logging).ok();

    let top_n = args.top.unwrap_or(config.report.top_n);
    if top_n == 0 {
        anyhow::bail!("--top must be at least 1");
    }

    let log_path = config.resolve_log_path(args.log.as_deref());
    tracing::info!(path = %log_path.display(), top_n, "Analyzing telemetry log");

    let outcome = LogAnalyzer::new(&log_path)
        .with_options(ReportOptions { top_n })
        .run()
        .with_context(|| format!("failed to analyze {}", log_path.display()))?;

    let render_options = RenderOptions {
        interpretation: !args.no_interpretation,
    };
    print!("{}", render_outcome(&outcome, &render_options));

    Ok(())
}

//! # ted-telemetry-core
//!
//! Core library for ted-telemetry - a report over the ted editor's local
//! telemetry log.
//!
//! This library provides:
//! - Domain types for telemetry events
//! - Loading of the newline-delimited JSON log, skipping malformed lines
//! - Aggregation into a [`TelemetryReport`]
//! - Text rendering of the report
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust,no_run
//! use ted_telemetry_core::{render_outcome, Config, LogAnalyzer, RenderOptions};
//!
//! let config = Config::load().expect("failed to load config");
//! let analyzer = LogAnalyzer::new(config.resolve_log_path(None));
//!
//! let outcome = analyzer.run().expect("failed to read telemetry log");
//! print!("{}", render_outcome(&outcome, &RenderOptions::default()));
//! ```

// Re-export commonly used items at the crate root
pub use analytics::{ReportOptions, TelemetryReport};
pub use analyzer::{AnalysisOutcome, LogAnalyzer};
pub use config::Config;
pub use error::{Error, Result};
pub use ingest::{load_events, LoadedLog};
pub use render::{render_outcome, render_text, RenderOptions};
pub use types::*;

// Public modules
pub mod analytics;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod render;
pub mod types;

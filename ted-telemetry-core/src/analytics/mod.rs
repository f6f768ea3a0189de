//! Analytics over the telemetry log
//!
//! Provides the aggregate statistics shown in the report:
//! - Unique sessions
//! - Event-type histogram
//! - Most opened files
//! - Characters typed
//! - Most used commands
//!
//! Rankings are built with [`FrequencyCounter`], whose tie-breaking rule is
//! first-seen order.

pub mod ranking;
pub mod report;

pub use ranking::{FrequencyCounter, RankEntry, Ranking};
pub use report::{ReportOptions, TelemetryReport};

//! Core domain types for ted-telemetry
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Event** | One telemetry record, written by the editor as a single JSON line |
//! | **Payload** | The event-type-specific mapping nested in an event |
//! | **Session** | A logical editor run, identified by an opaque `sessionId` |
//!
//! The log has no enforced schema. Every field read here may be absent or
//! carry an unexpected JSON type, and accessors degrade to `None` or zero
//! instead of failing.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Label used in the report when a key field is missing.
pub const UNKNOWN_LABEL: &str = "unknown";

// ============================================
// Event kinds
// ============================================

/// Event kinds whose payload the report inspects.
///
/// Every other `type` tag is only counted in the event histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `file_open`: payload carries the file `name`
    FileOpen,
    /// `typing`: payload carries an edit `type` and the `insert`ed text
    Typing,
    /// `command_executed`: payload carries the command `label`
    CommandExecuted,
    /// Any other tag, or no tag at all
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FileOpen => "file_open",
            EventKind::Typing => "typing",
            EventKind::CommandExecuted => "command_executed",
            EventKind::Other => "other",
        }
    }

    /// Classify a raw `type` tag.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("file_open") => EventKind::FileOpen,
            Some("typing") => EventKind::Typing,
            Some("command_executed") => EventKind::CommandExecuted,
            _ => EventKind::Other,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================
// Event
// ============================================

/// A single parsed telemetry record.
///
/// Built from one JSON object line. Fields are kept as loosely as the log
/// writes them; see the accessor methods for how missing data is treated.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Raw `sessionId` value; `None` when absent or `null`
    pub session_id: Option<Value>,
    /// `type` tag; non-string tags are kept as their JSON text
    pub event_type: Option<String>,
    /// `payload` mapping; empty when absent or not an object
    pub payload: Map<String, Value>,
}

impl Event {
    /// Build an event from a decoded JSON object.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let session_id = match object.remove("sessionId") {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        };

        let event_type = object.remove("type").and_then(|v| value_label(&v));

        let payload = match object.remove("payload") {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        Self {
            session_id,
            event_type,
            payload,
        }
    }

    /// Parse one log line.
    ///
    /// Invalid JSON is an [`Error::Json`]; valid JSON that is not an object is
    /// an [`Error::NotAnObject`].
    pub fn parse_line(line: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(line)? {
            Value::Object(object) => Ok(Self::from_object(object)),
            other => Err(Error::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Which kind of event this is.
    pub fn kind(&self) -> EventKind {
        EventKind::from_tag(self.event_type.as_deref())
    }

    /// Session bucket key. Events without a `sessionId` share the `None` bucket.
    pub fn session_key(&self) -> Option<String> {
        self.session_id.as_ref().map(Value::to_string)
    }

    /// Display label for a payload field.
    pub fn payload_label(&self, field: &str) -> Option<String> {
        self.payload.get(field).and_then(value_label)
    }

    /// `payload.name`, the opened file of a `file_open` event.
    pub fn file_name(&self) -> Option<String> {
        self.payload_label("name")
    }

    /// `payload.label`, the command of a `command_executed` event.
    pub fn command_label(&self) -> Option<String> {
        self.payload_label("label")
    }

    /// Characters inserted by a `typing` event with `payload.type == "change"`.
    ///
    /// Counts Unicode scalar values. A missing or non-string `insert` is zero,
    /// as is every other event.
    pub fn inserted_chars(&self) -> usize {
        if self.kind() != EventKind::Typing {
            return 0;
        }
        if self.payload.get("type").and_then(Value::as_str) != Some("change") {
            return 0;
        }
        self.payload
            .get("insert")
            .and_then(Value::as_str)
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }
}

/// Display text for a ranking key; missing keys show as [`UNKNOWN_LABEL`].
pub fn display_key(key: &Option<String>) -> &str {
    key.as_deref().unwrap_or(UNKNOWN_LABEL)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a JSON value as a display label.
///
/// Strings are used verbatim, `null` is treated as missing, anything else is
/// shown as compact JSON.
fn value_label(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

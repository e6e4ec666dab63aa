//! Structured JSON event logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, written to stderr by default so stdout stays the report

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal progress
    Info = 1,
    /// Non-fatal findings
    Warn = 2,
    /// Failed checks
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Destination shared by every clone of a logger
type Sink = Arc<Mutex<dyn Write + Send>>;

/// Event logger; a disabled logger drops every event.
#[derive(Clone, Default)]
pub struct Logger {
    sink: Option<Sink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Logger {
    /// A logger that writes nothing
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// A logger that writes JSON lines to stderr
    pub fn stderr() -> Self {
        Self::to_writer(io::stderr())
    }

    /// A logger that writes JSON lines to `writer`
    pub fn to_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Some(Arc::new(Mutex::new(writer))),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let Some(sink) = &self.sink else {
            return;
        };
        let line = Self::format_line(severity, event.as_str(), fields);
        // Logging failures never affect the run.
        if let Ok(mut writer) = sink.lock() {
            Self::log_to_writer(&line, &mut *writer);
        }
    }

    /// Log an event, deriving severity from the event kind
    pub fn event(&self, event: Event, fields: &[(&str, &str)]) {
        let severity = if event.is_failure() {
            Severity::Error
        } else {
            Severity::Info
        };
        self.log(severity, event, fields);
    }

    fn log_to_writer<W: Write + ?Sized>(line: &str, writer: &mut W) {
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Renders one newline-terminated JSON log line.
    pub fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(128);

        output.push_str("{\"event\":");
        output.push_str(&json_string(event));
        output.push_str(",\"severity\":");
        output.push_str(&json_string(severity.as_str()));

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted {
            output.push(',');
            output.push_str(&json_string(key));
            output.push(':');
            output.push_str(&json_string(value));
        }

        output.push_str("}\n");
        output
    }
}

fn json_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

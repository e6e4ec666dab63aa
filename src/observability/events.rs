//! Lifecycle events emitted during a validation run

use std::fmt;

/// Observable events in a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Run started against a data directory
    ValidationBegin,
    /// Table loaded and passed schema checking
    TableLoaded,
    /// Table missing, unreadable or failing schema checking
    TableRejected,
    /// Identity sets built from the entity tables
    IndexBuilt,
    /// Run finished with a verdict
    ValidationComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ValidationBegin => "VALIDATION_BEGIN",
            Event::TableLoaded => "TABLE_LOADED",
            Event::TableRejected => "TABLE_REJECTED",
            Event::IndexBuilt => "INDEX_BUILT",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
        }
    }

    /// Whether the event signals a failed table
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::TableRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

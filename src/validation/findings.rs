//! Finding taxonomy
//!
//! Fatal:
//! - MissingFile (per file)
//! - Malformed (per file)
//! - Schema (per table)
//! - UnknownReference (per row per field)
//! - Domain (per row per field)
//!
//! Non-fatal:
//! - EmptyRationale, DuplicateKey (advisory warnings)
//! - Orphans (informational)

use std::fmt;

use thiserror::Error;

use crate::schema::{SchemaError, TableRole};

/// A raw cell as seen by a check; `None` when the row had no cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellValue(Option<String>);

impl CellValue {
    pub fn present(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        Self(value.map(str::to_string))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "<missing>"),
        }
    }
}

/// Why a value fell outside its domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainReason {
    /// Not a base-10 integer
    NotAnInteger,
    /// Integer outside the allowed set
    OutOfRange { allowed: &'static [i64] },
}

/// A fatal finding. Any violation fails the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Missing file: {table}")]
    MissingFile { table: TableRole },

    #[error("{table} could not be read: {reason}")]
    Malformed { table: TableRole, reason: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{table} row {row}: {field} '{value}' not found in {target}")]
    UnknownReference {
        table: TableRole,
        row: usize,
        field: &'static str,
        value: CellValue,
        target: TableRole,
    },

    #[error("{table} row {row}: {}", domain_message(.field, .value, .reason))]
    Domain {
        table: TableRole,
        row: usize,
        field: &'static str,
        value: CellValue,
        reason: DomainReason,
    },
}

fn domain_message(field: &str, value: &CellValue, reason: &DomainReason) -> String {
    match reason {
        DomainReason::NotAnInteger => format!("invalid {} '{}'", field, value),
        DomainReason::OutOfRange { allowed } => {
            let allowed: Vec<String> = allowed.iter().map(i64::to_string).collect();
            format!("{} must be {}, got '{}'", field, allowed.join("/"), value)
        }
    }
}

impl Violation {
    /// Stable kind name used in JSON reports
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::MissingFile { .. } => "missing_file",
            Violation::Malformed { .. } => "malformed_file",
            Violation::Schema(_) => "schema",
            Violation::UnknownReference { .. } => "unknown_reference",
            Violation::Domain { .. } => "domain",
        }
    }

    pub fn table(&self) -> TableRole {
        match self {
            Violation::MissingFile { table }
            | Violation::Malformed { table, .. }
            | Violation::UnknownReference { table, .. }
            | Violation::Domain { table, .. } => *table,
            Violation::Schema(err) => err.role(),
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self {
            Violation::UnknownReference { row, .. } | Violation::Domain { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// A non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Non-zero strength with a blank rationale
    EmptyRationale { table: TableRole, row: usize },
    /// Identity value appearing on more than one row
    DuplicateKey {
        table: TableRole,
        field: &'static str,
        value: String,
        rows: Vec<usize>,
    },
}

impl Advisory {
    pub fn kind(&self) -> &'static str {
        match self {
            Advisory::EmptyRationale { .. } => "empty_rationale",
            Advisory::DuplicateKey { .. } => "duplicate_key",
        }
    }

    pub fn table(&self) -> TableRole {
        match self {
            Advisory::EmptyRationale { table, .. } | Advisory::DuplicateKey { table, .. } => *table,
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self {
            Advisory::EmptyRationale { row, .. } => Some(*row),
            Advisory::DuplicateKey { .. } => None,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::EmptyRationale { table, row } => {
                write!(f, "{} row {}: non-zero strength but empty rationale", table, row)
            }
            Advisory::DuplicateKey {
                table,
                field,
                value,
                rows,
            } => {
                let rows: Vec<String> = rows.iter().map(usize::to_string).collect();
                write!(
                    f,
                    "{}: duplicate {} '{}' on rows {}",
                    table,
                    field,
                    value,
                    rows.join(", ")
                )
            }
        }
    }
}

/// Entities of one kind that no connection references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanSummary {
    /// Entity table the orphans come from
    pub table: TableRole,
    /// Orphaned identities, sorted
    pub ids: Vec<String>,
    /// Maximum number of ids listed in the message
    pub preview_limit: usize,
}

impl OrphanSummary {
    pub fn preview(&self) -> &[String] {
        &self.ids[..self.ids.len().min(self.preview_limit)]
    }

    pub fn is_truncated(&self) -> bool {
        self.ids.len() > self.preview_limit
    }
}

impl fmt::Display for OrphanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} have no connections (ok if intentional): {}{}",
            self.ids.len(),
            self.table.label(),
            self.preview().join(", "),
            if self.is_truncated() { "..." } else { "" }
        )
    }
}

/// Console tag of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Ok,
    Warn,
    Error,
    Success,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of a validation report, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Progress or context line
    Context(String),
    /// Table loaded and passed schema checking
    Loaded {
        table: TableRole,
        rows: usize,
        fields: Vec<String>,
    },
    Violation(Violation),
    Advisory(Advisory),
    Orphans(OrphanSummary),
    /// Final pass marker
    Passed,
}

impl Finding {
    pub fn level(&self) -> Level {
        match self {
            Finding::Context(_) | Finding::Orphans(_) => Level::Info,
            Finding::Loaded { .. } => Level::Ok,
            Finding::Violation(_) => Level::Error,
            Finding::Advisory(_) => Level::Warn,
            Finding::Passed => Level::Success,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Finding::Violation(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Finding::Context(_) => "context",
            Finding::Loaded { .. } => "loaded",
            Finding::Violation(v) => v.kind(),
            Finding::Advisory(a) => a.kind(),
            Finding::Orphans(_) => "orphans",
            Finding::Passed => "passed",
        }
    }

    pub fn table(&self) -> Option<TableRole> {
        match self {
            Finding::Loaded { table, .. } => Some(*table),
            Finding::Violation(v) => Some(v.table()),
            Finding::Advisory(a) => Some(a.table()),
            Finding::Orphans(o) => Some(o.table),
            Finding::Context(_) | Finding::Passed => None,
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self {
            Finding::Violation(v) => v.row(),
            Finding::Advisory(a) => a.row(),
            _ => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Context(message) => write!(f, "{}", message),
            Finding::Loaded {
                table,
                rows,
                fields,
            } => write!(f, "{}: {} rows, fields=[{}]", table, rows, fields.join(", ")),
            Finding::Violation(v) => write!(f, "{}", v),
            Finding::Advisory(a) => write!(f, "{}", a),
            Finding::Orphans(o) => write!(f, "{}", o),
            Finding::Passed => write!(f, "All checks passed."),
        }
    }
}

impl From<Violation> for Finding {
    fn from(v: Violation) -> Self {
        Finding::Violation(v)
    }
}

impl From<Advisory> for Finding {
    fn from(a: Advisory) -> Self {
        Finding::Advisory(a)
    }
}

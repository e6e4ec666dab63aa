//! Schema error type

use std::fmt;

use super::types::TableRole;

/// A table whose header lacks required columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    role: TableRole,
    missing: Vec<String>,
}

impl SchemaError {
    /// Create a missing-columns error
    pub fn missing_columns(role: TableRole, missing: Vec<String>) -> Self {
        Self { role, missing }
    }

    /// Returns the error code
    pub fn code(&self) -> &'static str {
        "ETS_SCHEMA_MISSING_COLUMNS"
    }

    /// Returns the table role
    pub fn role(&self) -> TableRole {
        self.role
    }

    /// Returns the missing columns in declaration order
    pub fn missing(&self) -> &[String] {
        &self.missing
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} missing required columns: {}",
            self.role,
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_missing_columns() {
        let err = SchemaError::missing_columns(
            TableRole::Connections,
            vec!["strength".into(), "rationale".into()],
        );
        assert_eq!(
            err.to_string(),
            "connections.csv missing required columns: strength, rationale"
        );
        assert_eq!(err.code(), "ETS_SCHEMA_MISSING_COLUMNS");
    }
}

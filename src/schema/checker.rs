//! Header checking against the required columns of a role

use std::collections::HashSet;

use super::errors::SchemaError;
use super::types::{RoleColumns, TableRole, REQUIRED_COLUMNS};

/// Checks observed headers against a fixed required-column table.
///
/// Checking is deterministic and does not touch row data.
#[derive(Debug, Clone, Copy)]
pub struct SchemaChecker {
    required: &'static [RoleColumns],
}

impl SchemaChecker {
    /// Creates a checker over the given required-column table.
    pub fn new(required: &'static [RoleColumns]) -> Self {
        Self { required }
    }

    /// Required columns for `role`; empty if the role is not declared.
    pub fn required_columns(&self, role: TableRole) -> &'static [&'static str] {
        self.required
            .iter()
            .find(|rc| rc.role == role)
            .map(|rc| rc.columns)
            .unwrap_or(&[])
    }

    /// Required columns absent from `headers`, in declaration order.
    pub fn missing_columns(&self, role: TableRole, headers: &[String]) -> Vec<String> {
        let observed: HashSet<&str> = headers.iter().map(String::as_str).collect();
        self.required_columns(role)
            .iter()
            .filter(|column| !observed.contains(*column))
            .map(|column| column.to_string())
            .collect()
    }

    /// Checks `headers` for `role`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` naming every missing column.
    pub fn check(&self, role: TableRole, headers: &[String]) -> Result<(), SchemaError> {
        let missing = self.missing_columns(role, headers);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::missing_columns(role, missing))
        }
    }
}

impl Default for SchemaChecker {
    fn default() -> Self {
        Self::new(&REQUIRED_COLUMNS)
    }
}

//! Schema checking for the curriculum tables
//!
//! Each table plays a fixed role that determines its required columns.
//!
//! # Rules
//!
//! - Every required column must appear in the header
//! - Column order is irrelevant
//! - Extra columns are tolerated and ignored
//! - A schema failure stops row checks on that table only

mod checker;
mod errors;
mod types;

pub use checker::SchemaChecker;
pub use errors::SchemaError;
pub use types::{columns, RoleColumns, TableRole, REQUIRED_COLUMNS};

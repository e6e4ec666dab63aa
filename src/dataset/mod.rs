//! Tabular loading for the curriculum datasets
//!
//! A table is read once per run into memory:
//! - Header row is mandatory and kept in file order
//! - Rows keep load order (it determines 1-based row numbers)
//! - Short rows keep their missing cells missing, never defaulted
//! - No trimming or coercion of cell values

mod errors;
mod loader;
mod table;

pub use errors::{DatasetError, DatasetResult};
pub use loader::TableLoader;
pub use table::{Row, Table};

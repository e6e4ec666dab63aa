//! ets-validate - strict validation for the curriculum visualization datasets
//!
//! Checks the four CSV tables (calculus topics, CS topics, connections,
//! prerequisites) for schema completeness, referential integrity, domain
//! values and orphaned topics before the visualization consumes them.

pub mod cli;
pub mod dataset;
pub mod observability;
pub mod schema;
pub mod validation;

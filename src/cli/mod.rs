//! CLI module for ets-validate
//!
//! Resolves the data directory, loads optional configuration, runs the
//! validator and writes the report in the requested format.

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, OutputFormat};
pub use commands::{run, run_with};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_text};

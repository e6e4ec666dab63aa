//! CLI command implementation
//!
//! Sequence:
//! 1. Load configuration (defaults when no --config)
//! 2. Resolve `<root>/<data_dir>`; abort if it is not a directory
//! 3. Validate every table
//! 4. Write the report, return the verdict

use std::io::{self, Write};

use crate::observability::Logger;
use crate::validation::{DatasetValidator, Verdict};

use super::args::{Cli, OutputFormat};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_json, write_text};

/// Parse process arguments and run against stdout.
///
/// `--help`/`--version` end the run with a pass.
pub fn run() -> CliResult<Verdict> {
    let Some(cli) = Cli::parse_args()? else {
        return Ok(Verdict::Pass);
    };
    run_with(&cli, io::stdout().lock())
}

/// Run with already-parsed arguments, writing the report to `out`.
pub fn run_with<W: Write>(cli: &Cli, out: W) -> CliResult<Verdict> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let data_dir = cli.root.join(&config.data_dir);
    if !data_dir.is_dir() {
        return Err(CliError::data_dir_unavailable(data_dir.display()));
    }

    let logger = if cli.verbose {
        Logger::stderr()
    } else {
        Logger::disabled()
    };

    let report = DatasetValidator::new(config.validation_options())
        .with_logger(logger)
        .validate(&data_dir);

    match cli.format {
        OutputFormat::Text => write_text(&report, out)?,
        OutputFormat::Json => write_json(&report, out)?,
    }

    Ok(report.verdict())
}

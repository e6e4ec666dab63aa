//! CLI argument definitions using clap
//!
//! - ets-validate [ROOT] [--config <path>] [--format text|json] [--verbose]

use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use super::errors::{CliError, CliResult};

/// ets-validate - validate the curriculum CSVs before visualization
#[derive(Parser, Debug)]
#[command(name = "ets-validate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root containing the data directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit structured JSON event logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[TAG] message` lines
    Text,
    /// One JSON document
    Json,
}

impl Cli {
    /// Parse process arguments
    pub fn parse_args() -> CliResult<Option<Self>> {
        Self::from_args(std::env::args_os())
    }

    /// Parse an argument list.
    ///
    /// `--help` and `--version` print to stdout and yield `Ok(None)`. Any
    /// other parse failure becomes a usage error so it exits like every
    /// other CLI error.
    pub fn from_args<I, T>(args: I) -> CliResult<Option<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(e) if !e.use_stderr() => {
                e.print()?;
                Ok(None)
            }
            Err(e) => Err(CliError::usage_error(e.to_string().trim_end())),
        }
    }
}

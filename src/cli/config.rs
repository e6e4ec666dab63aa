//! Optional JSON configuration
//!
//! Every field has a default; an absent config file means all defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationOptions, DEFAULT_PREVIEW_LIMIT};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Subdirectory of the root holding the tables (default "data")
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Orphan ids listed per summary line (default 10)
    #[serde(default = "default_orphan_preview_limit")]
    pub orphan_preview_limit: usize,

    /// Warn about duplicate identity keys (default true)
    #[serde(default = "default_report_duplicate_keys")]
    pub report_duplicate_keys: bool,
}

fn default_data_dir() -> String {
    "data".to_string()
}
fn default_orphan_preview_limit() -> usize {
    DEFAULT_PREVIEW_LIMIT
}
fn default_report_duplicate_keys() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            orphan_preview_limit: default_orphan_preview_limit(),
            report_duplicate_keys: default_report_duplicate_keys(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        if self.orphan_preview_limit == 0 {
            return Err(CliError::config_error("orphan_preview_limit must be > 0"));
        }

        Ok(())
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            orphan_preview_limit: self.orphan_preview_limit,
            report_duplicate_keys: self.report_duplicate_keys,
        }
    }
}

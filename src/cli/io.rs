//! Report output
//!
//! - text: one `[TAG] message` line per finding
//! - json: a single JSON object on one line

use std::io::Write;

use crate::observability::Console;
use crate::validation::ValidationReport;

use super::errors::CliResult;

/// Write the report as tagged console lines
pub fn write_text<W: Write>(report: &ValidationReport, out: W) -> CliResult<()> {
    let mut console = Console::new(out);
    report.render_text(&mut console)?;
    Ok(())
}

/// Write the report as one JSON document
pub fn write_json<W: Write>(report: &ValidationReport, mut out: W) -> CliResult<()> {
    serde_json::to_writer(&mut out, &report.to_document())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

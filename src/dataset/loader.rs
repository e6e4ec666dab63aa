//! CSV table loader
//!
//! - First record is the header row
//! - Ragged rows are tolerated: missing trailing cells stay missing,
//!   cells beyond the header are ignored
//! - Blank lines are skipped
//! - Input must be UTF-8; a leading byte-order mark is dropped

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::errors::{DatasetError, DatasetResult};
use super::table::{Row, Table};

const BOM: char = '\u{feff}';

/// Reads comma-delimited tables from disk.
pub struct TableLoader;

impl TableLoader {
    /// Loads the table at `path`.
    ///
    /// A path that does not exist yields `DatasetError::MissingFile`; any
    /// read or parse failure yields `DatasetError::Malformed`.
    pub fn load(path: &Path) -> DatasetResult<Table> {
        if !path.exists() {
            return Err(DatasetError::MissingFile(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| DatasetError::Malformed {
            path: path.to_path_buf(),
            reason: format!("Failed to open file: {}", e),
        })?;

        Self::read(file).map_err(|e| DatasetError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parses a table from any reader.
    pub fn read<R: Read>(reader: R) -> Result<Table, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if let Some(first) = headers.first_mut() {
            if let Some(stripped) = first.strip_prefix(BOM) {
                *first = stripped.to_string();
            }
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(Row::new(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, value)| (header.as_str(), value)),
            ));
        }

        Ok(Table::new(headers, rows))
    }
}

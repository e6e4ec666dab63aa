//! Validation pipeline
//!
//! Loader → schema check (per table) → identity index → referential/domain
//! checks (per relationship table) → orphans → verdict.
//!
//! Each stage runs when its inputs are available. A table that is missing,
//! unreadable or fails its schema check only removes the stages that depend
//! on it; every other check still runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::dataset::{DatasetError, Table, TableLoader};
use crate::observability::{Event, Logger, Severity};
use crate::schema::{SchemaChecker, TableRole};

use super::findings::{Finding, Violation};
use super::index::IdentityIndex;
use super::orphans::{OrphanReport, DEFAULT_PREVIEW_LIMIT};
use super::references::ReferentialValidator;
use super::report::ValidationReport;

/// Tunables for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Ids listed per orphan summary
    pub orphan_preview_limit: usize,
    /// Emit advisories for duplicate identity keys
    pub report_duplicate_keys: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            orphan_preview_limit: DEFAULT_PREVIEW_LIMIT,
            report_duplicate_keys: true,
        }
    }
}

/// Runs every check over one data directory.
pub struct DatasetValidator {
    checker: SchemaChecker,
    options: ValidationOptions,
    logger: Logger,
}

impl DatasetValidator {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            checker: SchemaChecker::default(),
            options,
            logger: Logger::disabled(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Validates the four tables under `data_dir` and concludes the report.
    pub fn validate(&self, data_dir: &Path) -> ValidationReport {
        let shown = fs::canonicalize(data_dir).unwrap_or_else(|_| data_dir.to_path_buf());
        let shown_str = shown.display().to_string();
        let mut report = ValidationReport::new(&shown);

        self.logger
            .event(Event::ValidationBegin, &[("data_dir", shown_str.as_str())]);
        report.push(Finding::Context(format!("Validating CSVs in: {}", shown_str)));

        let mut tables: BTreeMap<TableRole, Table> = BTreeMap::new();
        for role in TableRole::ALL {
            if let Some(table) = self.load_table(data_dir, role, &mut report) {
                tables.insert(role, table);
            }
        }

        let index = match (
            tables.get(&TableRole::CalculusTopics),
            tables.get(&TableRole::CsTopics),
        ) {
            (Some(calc), Some(cs)) => Some(IdentityIndex::build(calc, cs)),
            _ => None,
        };

        if let Some(index) = &index {
            let calc_count = index.calc_ids().len().to_string();
            let cs_count = index.cs_ids().len().to_string();
            self.logger.event(
                Event::IndexBuilt,
                &[("calc_ids", calc_count.as_str()), ("cs_ids", cs_count.as_str())],
            );

            if self.options.report_duplicate_keys {
                report.extend(index.duplicates().iter().cloned().map(Finding::from));
            }

            let validator = ReferentialValidator::new(index);

            let referenced = tables.get(&TableRole::Connections).map(|connections| {
                let check = validator.check_connections(connections);
                report.extend(check.findings);
                check.referenced
            });

            if let Some(prerequisites) = tables.get(&TableRole::Prerequisites) {
                report.extend(validator.check_prerequisites(prerequisites));
            }

            if let Some(referenced) = &referenced {
                let orphans = OrphanReport::compute(index, referenced);
                report.extend(orphans.findings(self.options.orphan_preview_limit));
            }
        }

        let verdict = report.conclude();
        let fatal = report.violations().count();
        let advisories = report.advisories().count();
        let severity = if !verdict.is_pass() {
            Severity::Error
        } else if advisories > 0 {
            Severity::Warn
        } else {
            Severity::Info
        };
        let fatal = fatal.to_string();
        let warnings = advisories.to_string();
        self.logger.log(
            severity,
            Event::ValidationComplete,
            &[
                ("verdict", if verdict.is_pass() { "pass" } else { "fail" }),
                ("errors", fatal.as_str()),
                ("warnings", warnings.as_str()),
            ],
        );

        report
    }

    /// Loads and schema-checks one table, recording the outcome.
    fn load_table(
        &self,
        data_dir: &Path,
        role: TableRole,
        report: &mut ValidationReport,
    ) -> Option<Table> {
        let path = data_dir.join(role.file_name());

        let table = match TableLoader::load(&path) {
            Ok(table) => table,
            Err(err) => {
                self.logger.event(
                    Event::TableRejected,
                    &[("table", role.file_name()), ("reason", err.reason().as_str())],
                );
                report.push(match err {
                    DatasetError::MissingFile(_) => Violation::MissingFile { table: role },
                    DatasetError::Malformed { reason, .. } => Violation::Malformed {
                        table: role,
                        reason,
                    },
                });
                return None;
            }
        };

        if let Err(err) = self.checker.check(role, table.headers()) {
            let missing = err.missing().join(",");
            self.logger.event(
                Event::TableRejected,
                &[("table", role.file_name()), ("missing_columns", missing.as_str())],
            );
            report.push(Violation::from(err));
            return None;
        }

        let rows = table.len().to_string();
        self.logger
            .event(Event::TableLoaded, &[("table", role.file_name()), ("rows", rows.as_str())]);
        report.push(Finding::Loaded {
            table: role,
            rows: table.len(),
            fields: table.headers().to_vec(),
        });

        Some(table)
    }
}

impl Default for DatasetValidator {
    fn default() -> Self {
        Self::new(ValidationOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn events(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn complete_dataset(dir: &Path) {
        write(
            dir,
            "calculus_topics.csv",
            "calculus_id,calculus_name,calc_course,short_desc,display_order\n\
             C1,Limits,Calc I,Approach,1\n",
        );
        write(dir, "cs_topics.csv", "cs_id,cs_name,concentration,short_desc\nS1,Graphics,Visual,Pixels\n");
        write(dir, "connections.csv", "cs_id,calculus_id,strength,rationale\nS1,C1,1,curves\n");
        write(dir, "prerequisites.csv", "source_calculus_id,target_calculus_id\n");
    }

    #[test]
    fn test_complete_dataset_passes() {
        let tmp = TempDir::new().unwrap();
        complete_dataset(tmp.path());

        let report = DatasetValidator::default().validate(tmp.path());
        assert!(report.verdict().is_pass());
        assert_eq!(report.findings().last(), Some(&Finding::Passed));
    }

    #[test]
    fn test_all_missing_files_reported() {
        let tmp = TempDir::new().unwrap();
        let report = DatasetValidator::default().validate(tmp.path());

        let missing: Vec<TableRole> = report
            .violations()
            .filter_map(|v| match v {
                Violation::MissingFile { table } => Some(*table),
                _ => None,
            })
            .collect();
        assert_eq!(missing, TableRole::ALL);
        assert!(!report.verdict().is_pass());
    }

    #[test]
    fn test_schema_failure_only_blocks_its_table() {
        let tmp = TempDir::new().unwrap();
        complete_dataset(tmp.path());
        write(tmp.path(), "connections.csv", "cs_id,calculus_id\nS1,C1\n");
        write(
            tmp.path(),
            "prerequisites.csv",
            "source_calculus_id,target_calculus_id\nC1,C7\n",
        );

        let report = DatasetValidator::default().validate(tmp.path());
        let kinds: Vec<&str> = report.violations().map(Violation::kind).collect();
        assert_eq!(kinds, ["schema", "unknown_reference"]);
        // Orphans need connection references.
        assert!(!report
            .findings()
            .iter()
            .any(|f| matches!(f, Finding::Orphans(_))));
    }

    #[test]
    fn test_duplicate_keys_toggle() {
        let tmp = TempDir::new().unwrap();
        complete_dataset(tmp.path());
        write(
            tmp.path(),
            "cs_topics.csv",
            "cs_id,cs_name,concentration,short_desc\nS1,A,B,C\nS1,D,E,F\n",
        );

        let report = DatasetValidator::default().validate(tmp.path());
        assert_eq!(report.advisories().count(), 1);
        assert!(report.verdict().is_pass());

        let quiet = DatasetValidator::new(ValidationOptions {
            report_duplicate_keys: false,
            ..ValidationOptions::default()
        })
        .validate(tmp.path());
        assert_eq!(quiet.advisories().count(), 0);
    }

    #[test]
    fn test_lifecycle_events_in_order() {
        let tmp = TempDir::new().unwrap();
        complete_dataset(tmp.path());

        let buf = SharedBuf::default();
        let report = DatasetValidator::default()
            .with_logger(Logger::to_writer(buf.clone()))
            .validate(tmp.path());
        assert!(report.verdict().is_pass());

        let events = buf.events();
        let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            [
                "VALIDATION_BEGIN",
                "TABLE_LOADED",
                "TABLE_LOADED",
                "TABLE_LOADED",
                "TABLE_LOADED",
                "INDEX_BUILT",
                "VALIDATION_COMPLETE",
            ]
        );
        assert_eq!(events[1]["table"], "calculus_topics.csv");
        assert_eq!(events[1]["rows"], "1");
        let complete = &events[6];
        assert_eq!(complete["severity"], "INFO");
        assert_eq!(complete["verdict"], "pass");
        assert_eq!(complete["errors"], "0");
    }

    #[test]
    fn test_completion_severity_follows_outcome() {
        let tmp = TempDir::new().unwrap();
        complete_dataset(tmp.path());
        write(tmp.path(), "connections.csv", "cs_id,calculus_id,strength,rationale\nS1,C1,2,\n");

        let buf = SharedBuf::default();
        DatasetValidator::default()
            .with_logger(Logger::to_writer(buf.clone()))
            .validate(tmp.path());
        let complete = buf.events().pop().unwrap();
        assert_eq!(complete["severity"], "WARN");
        assert_eq!(complete["warnings"], "1");

        fs::remove_file(tmp.path().join("cs_topics.csv")).unwrap();
        let buf = SharedBuf::default();
        DatasetValidator::default()
            .with_logger(Logger::to_writer(buf.clone()))
            .validate(tmp.path());
        let events = buf.events();
        assert!(events
            .iter()
            .any(|e| e["event"] == "TABLE_REJECTED" && e["table"] == "cs_topics.csv"));
        assert!(!events.iter().any(|e| e["event"] == "INDEX_BUILT"));
        let complete = events.last().unwrap();
        assert_eq!(complete["severity"], "ERROR");
        assert_eq!(complete["verdict"], "fail");
    }
}

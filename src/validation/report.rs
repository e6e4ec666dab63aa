//! Result aggregation
//!
//! Findings are kept in the order they were produced. The verdict is derived
//! from them; the report itself never fails.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::observability::Console;

use super::findings::{Advisory, Finding, Violation};

/// Pass/fail outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Process exit code: 0 on pass, 1 on fail
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
        }
    }

    pub fn is_pass(&self) -> bool {
        *self == Verdict::Pass
    }
}

/// Ordered findings of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    data_dir: PathBuf,
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, finding: impl Into<Finding>) {
        self.findings.push(finding.into());
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Violation(v) => Some(v),
            _ => None,
        })
    }

    pub fn advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Advisory(a) => Some(a),
            _ => None,
        })
    }

    /// Whether any fatal finding was recorded
    pub fn has_fatal(&self) -> bool {
        self.findings.iter().any(Finding::is_fatal)
    }

    pub fn verdict(&self) -> Verdict {
        if self.has_fatal() {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    /// Closes the report, appending the pass marker when nothing failed.
    pub fn conclude(&mut self) -> Verdict {
        let verdict = self.verdict();
        if verdict.is_pass() && !self.findings.contains(&Finding::Passed) {
            self.findings.push(Finding::Passed);
        }
        verdict
    }

    /// Renders every finding as a `[TAG] message` line.
    pub fn render_text<W: Write>(&self, console: &mut Console<W>) -> io::Result<()> {
        for finding in &self.findings {
            console.line(finding.level().as_str(), &finding.to_string())?;
        }
        console.finish()
    }

    /// Serializable view of the report
    pub fn to_document(&self) -> ReportDocument {
        ReportDocument {
            data_dir: self.data_dir.display().to_string(),
            verdict: self.verdict(),
            findings: self
                .findings
                .iter()
                .map(|f| FindingRecord {
                    severity: f.level().as_str(),
                    kind: f.kind(),
                    table: f.table().map(|t| t.file_name()),
                    row: f.row(),
                    message: f.to_string(),
                })
                .collect(),
        }
    }
}

/// JSON form of a report
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub data_dir: String,
    pub verdict: Verdict,
    pub findings: Vec<FindingRecord>,
}

/// JSON form of one finding
#[derive(Debug, Clone, Serialize)]
pub struct FindingRecord {
    pub severity: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TableRole;

    fn advisory() -> Advisory {
        Advisory::EmptyRationale {
            table: TableRole::Connections,
            row: 2,
        }
    }

    #[test]
    fn test_empty_report_passes() {
        let mut report = ValidationReport::new("data");
        assert_eq!(report.conclude(), Verdict::Pass);
        assert_eq!(report.findings(), [Finding::Passed]);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut report = ValidationReport::new("data");
        report.push(advisory());
        assert_eq!(report.conclude(), Verdict::Pass);
        assert_eq!(report.advisories().count(), 1);
    }

    #[test]
    fn test_violation_fails_without_pass_marker() {
        let mut report = ValidationReport::new("data");
        report.push(Violation::MissingFile {
            table: TableRole::Prerequisites,
        });
        assert_eq!(report.conclude(), Verdict::Fail);
        assert!(!report.findings().contains(&Finding::Passed));
        assert_eq!(Verdict::Fail.exit_code(), 1);
    }

    #[test]
    fn test_conclude_is_idempotent() {
        let mut report = ValidationReport::new("data");
        report.conclude();
        report.conclude();
        assert_eq!(report.findings().len(), 1);
    }

    #[test]
    fn test_render_text_in_order() {
        let mut report = ValidationReport::new("data");
        report.push(Finding::Context("Validating CSVs in: data".into()));
        report.push(advisory());
        report.conclude();

        let mut console = Console::new(Vec::new());
        report.render_text(&mut console).unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();

        assert_eq!(
            text,
            "[INFO] Validating CSVs in: data\n\
             [WARN] connections.csv row 2: non-zero strength but empty rationale\n\
             [SUCCESS] All checks passed.\n"
        );
    }

    #[test]
    fn test_document_serializes() {
        let mut report = ValidationReport::new("data");
        report.push(Violation::MissingFile {
            table: TableRole::CsTopics,
        });
        report.conclude();

        let value = serde_json::to_value(report.to_document()).unwrap();
        assert_eq!(value["verdict"], "fail");
        assert_eq!(value["findings"][0]["severity"], "ERROR");
        assert_eq!(value["findings"][0]["kind"], "missing_file");
        assert!(value["findings"][0].get("level").is_none());
        assert_eq!(value["findings"][0]["table"], "cs_topics.csv");
        assert!(value["findings"][0].get("row").is_none());
    }
}

//! Referential and domain checks for the relationship tables
//!
//! Per row, every check runs independently: a single row may produce
//! several findings. Advisories never count as failures.

use std::collections::BTreeSet;

use crate::dataset::{Row, Table};
use crate::schema::{columns, TableRole};

use super::findings::{Advisory, CellValue, DomainReason, Finding, Violation};
use super::index::IdentityIndex;

/// Allowed connection strengths
pub const STRENGTH_DOMAIN: &[i64] = &[0, 1, 2];

/// Identities referenced by connection rows, whether valid or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencedIds {
    pub calc: BTreeSet<String>,
    pub cs: BTreeSet<String>,
}

/// Findings for the connections table plus the ids it references.
#[derive(Debug, Clone, Default)]
pub struct ConnectionCheck {
    pub findings: Vec<Finding>,
    pub referenced: ReferencedIds,
}

/// Parses a strength cell: base-10 integer, surrounding whitespace allowed,
/// within `STRENGTH_DOMAIN`.
pub fn parse_strength(raw: &str) -> Result<i64, DomainReason> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainReason::NotAnInteger)?;
    if STRENGTH_DOMAIN.contains(&value) {
        Ok(value)
    } else {
        Err(DomainReason::OutOfRange {
            allowed: STRENGTH_DOMAIN,
        })
    }
}

/// Checks relationship rows against an identity index.
pub struct ReferentialValidator<'a> {
    index: &'a IdentityIndex,
}

impl<'a> ReferentialValidator<'a> {
    pub fn new(index: &'a IdentityIndex) -> Self {
        Self { index }
    }

    /// Checks every connection row in load order.
    pub fn check_connections(&self, table: &Table) -> ConnectionCheck {
        let mut check = ConnectionCheck::default();

        for (row_no, row) in table.numbered_rows() {
            if let Some(id) = row.get(columns::CALCULUS_ID) {
                check.referenced.calc.insert(id.to_string());
            }
            if let Some(id) = row.get(columns::CS_ID) {
                check.referenced.cs.insert(id.to_string());
            }
            check
                .findings
                .extend(self.check_connection_row(row_no, row));
        }

        check
    }

    /// Checks one connection row.
    pub fn check_connection_row(&self, row_no: usize, row: &Row) -> Vec<Finding> {
        let mut findings = Vec::new();
        let table = TableRole::Connections;

        if let Some(v) = self.reference(
            table,
            row_no,
            row,
            columns::CALCULUS_ID,
            TableRole::CalculusTopics,
        ) {
            findings.push(v.into());
        }
        if let Some(v) = self.reference(table, row_no, row, columns::CS_ID, TableRole::CsTopics) {
            findings.push(v.into());
        }

        let raw_strength = row.get(columns::STRENGTH);
        let strength = match raw_strength {
            Some(raw) => parse_strength(raw),
            None => Err(DomainReason::NotAnInteger),
        };

        match strength {
            Ok(strength) => {
                let rationale = row.get(columns::RATIONALE).unwrap_or("");
                if strength != 0 && rationale.trim().is_empty() {
                    findings.push(Advisory::EmptyRationale { table, row: row_no }.into());
                }
            }
            Err(reason) => findings.push(
                Violation::Domain {
                    table,
                    row: row_no,
                    field: columns::STRENGTH,
                    value: CellValue::from(raw_strength),
                    reason,
                }
                .into(),
            ),
        }

        findings
    }

    /// Checks every prerequisite row in load order.
    pub fn check_prerequisites(&self, table: &Table) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (row_no, row) in table.numbered_rows() {
            for field in [columns::SOURCE_CALCULUS_ID, columns::TARGET_CALCULUS_ID] {
                if let Some(v) = self.reference(
                    TableRole::Prerequisites,
                    row_no,
                    row,
                    field,
                    TableRole::CalculusTopics,
                ) {
                    findings.push(v.into());
                }
            }
        }

        findings
    }

    /// Resolves `field` of `row` against the identity set of `target`.
    fn reference(
        &self,
        table: TableRole,
        row_no: usize,
        row: &Row,
        field: &'static str,
        target: TableRole,
    ) -> Option<Violation> {
        let value = row.get(field);
        let known = match (value, target) {
            (Some(id), TableRole::CalculusTopics) => self.index.contains_calc(id),
            (Some(id), TableRole::CsTopics) => self.index.contains_cs(id),
            _ => false,
        };

        if known {
            None
        } else {
            Some(Violation::UnknownReference {
                table,
                row: row_no,
                field,
                value: CellValue::from(value),
                target,
            })
        }
    }
}

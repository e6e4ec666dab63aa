//! Identity sets for the entity tables
//!
//! Duplicate keys collapse into the set. They are recorded separately so the
//! run can surface them as advisories without failing.

use std::collections::{BTreeMap, BTreeSet};

use crate::dataset::Table;
use crate::schema::{columns, TableRole};

use super::findings::Advisory;

/// Valid primary-key values for calculus and CS topics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityIndex {
    calc_ids: BTreeSet<String>,
    cs_ids: BTreeSet<String>,
    duplicates: Vec<Advisory>,
}

impl IdentityIndex {
    /// Builds both identity sets. Rows with no key cell contribute nothing.
    pub fn build(calculus_topics: &Table, cs_topics: &Table) -> Self {
        let (calc_ids, mut duplicates) =
            collect_ids(calculus_topics, TableRole::CalculusTopics, columns::CALCULUS_ID);
        let (cs_ids, cs_duplicates) = collect_ids(cs_topics, TableRole::CsTopics, columns::CS_ID);
        duplicates.extend(cs_duplicates);

        Self {
            calc_ids,
            cs_ids,
            duplicates,
        }
    }

    pub fn calc_ids(&self) -> &BTreeSet<String> {
        &self.calc_ids
    }

    pub fn cs_ids(&self) -> &BTreeSet<String> {
        &self.cs_ids
    }

    pub fn contains_calc(&self, id: &str) -> bool {
        self.calc_ids.contains(id)
    }

    pub fn contains_cs(&self, id: &str) -> bool {
        self.cs_ids.contains(id)
    }

    /// Identity values seen on more than one row, calculus topics first,
    /// each table ordered by value.
    pub fn duplicates(&self) -> &[Advisory] {
        &self.duplicates
    }
}

fn collect_ids(
    table: &Table,
    role: TableRole,
    column: &'static str,
) -> (BTreeSet<String>, Vec<Advisory>) {
    let mut seen: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (row_no, row) in table.numbered_rows() {
        if let Some(id) = row.get(column) {
            seen.entry(id).or_default().push(row_no);
        }
    }

    let duplicates = seen
        .iter()
        .filter(|(_, rows)| rows.len() > 1)
        .map(|(id, rows)| Advisory::DuplicateKey {
            table: role,
            field: column,
            value: id.to_string(),
            rows: rows.clone(),
        })
        .collect();

    let ids = seen.into_keys().map(str::to_string).collect();
    (ids, duplicates)
}

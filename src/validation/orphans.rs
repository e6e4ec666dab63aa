//! Orphan detection: entities no connection row references.

use crate::schema::TableRole;

use super::findings::{Finding, OrphanSummary};
use super::index::IdentityIndex;
use super::references::ReferencedIds;

/// Default number of orphan ids listed per summary line
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Orphaned identities per entity table, each sorted lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrphanReport {
    pub calculus: Vec<String>,
    pub cs: Vec<String>,
}

impl OrphanReport {
    /// Computes `calc_ids - referenced.calc` and `cs_ids - referenced.cs`.
    pub fn compute(index: &IdentityIndex, referenced: &ReferencedIds) -> Self {
        Self {
            calculus: index
                .calc_ids()
                .difference(&referenced.calc)
                .cloned()
                .collect(),
            cs: index.cs_ids().difference(&referenced.cs).cloned().collect(),
        }
    }

    /// Informational findings, one per non-empty orphan set.
    pub fn findings(&self, preview_limit: usize) -> Vec<Finding> {
        [
            (TableRole::CalculusTopics, &self.calculus),
            (TableRole::CsTopics, &self.cs),
        ]
        .into_iter()
        .filter(|(_, ids)| !ids.is_empty())
        .map(|(table, ids)| {
            Finding::Orphans(OrphanSummary {
                table,
                ids: ids.clone(),
                preview_limit,
            })
        })
        .collect()
    }
}

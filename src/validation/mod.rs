//! Validation engine for the curriculum datasets
//!
//! # Checks
//!
//! - Required columns present per table role
//! - Every `calculus_id` in connections and prerequisites is a known topic
//! - Every `cs_id` in connections is a known topic
//! - `strength` is an integer in {0, 1, 2}
//! - Non-zero strength carries a rationale (advisory)
//! - Topics no connection references are listed (informational)
//!
//! Findings accumulate; nothing aborts early. A single run surfaces every
//! problem it can reach.

mod findings;
mod index;
mod orphans;
mod references;
mod report;
mod runner;

pub use findings::{
    Advisory, CellValue, DomainReason, Finding, Level, OrphanSummary, Violation,
};
pub use index::IdentityIndex;
pub use orphans::{OrphanReport, DEFAULT_PREVIEW_LIMIT};
pub use references::{
    parse_strength, ConnectionCheck, ReferencedIds, ReferentialValidator, STRENGTH_DOMAIN,
};
pub use report::{FindingRecord, ReportDocument, ValidationReport, Verdict};
pub use runner::{DatasetValidator, ValidationOptions};

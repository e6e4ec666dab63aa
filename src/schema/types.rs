//! Table roles and their required columns

use std::fmt;

use serde::Serialize;

/// Column names shared by the checks.
pub mod columns {
    pub const CALCULUS_ID: &str = "calculus_id";
    pub const CALCULUS_NAME: &str = "calculus_name";
    pub const CALC_COURSE: &str = "calc_course";
    pub const SHORT_DESC: &str = "short_desc";
    pub const DISPLAY_ORDER: &str = "display_order";
    pub const CS_ID: &str = "cs_id";
    pub const CS_NAME: &str = "cs_name";
    pub const CONCENTRATION: &str = "concentration";
    pub const STRENGTH: &str = "strength";
    pub const RATIONALE: &str = "rationale";
    pub const SOURCE_CALCULUS_ID: &str = "source_calculus_id";
    pub const TARGET_CALCULUS_ID: &str = "target_calculus_id";
}

/// The fixed logical table types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRole {
    CalculusTopics,
    CsTopics,
    Connections,
    Prerequisites,
}

impl TableRole {
    /// All roles in processing order
    pub const ALL: [TableRole; 4] = [
        TableRole::CalculusTopics,
        TableRole::CsTopics,
        TableRole::Connections,
        TableRole::Prerequisites,
    ];

    /// File name under the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TableRole::CalculusTopics => "calculus_topics.csv",
            TableRole::CsTopics => "cs_topics.csv",
            TableRole::Connections => "connections.csv",
            TableRole::Prerequisites => "prerequisites.csv",
        }
    }

    /// Human-readable plural used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            TableRole::CalculusTopics => "calculus topics",
            TableRole::CsTopics => "CS topics",
            TableRole::Connections => "connections",
            TableRole::Prerequisites => "prerequisites",
        }
    }

    /// Primary key column for entity tables
    pub fn identity_column(&self) -> Option<&'static str> {
        match self {
            TableRole::CalculusTopics => Some(columns::CALCULUS_ID),
            TableRole::CsTopics => Some(columns::CS_ID),
            TableRole::Connections | TableRole::Prerequisites => None,
        }
    }
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Required columns for one role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColumns {
    pub role: TableRole,
    pub columns: &'static [&'static str],
}

/// Required columns per role, in declaration order.
pub static REQUIRED_COLUMNS: [RoleColumns; 4] = [
    RoleColumns {
        role: TableRole::CalculusTopics,
        columns: &[
            columns::CALCULUS_ID,
            columns::CALCULUS_NAME,
            columns::CALC_COURSE,
            columns::SHORT_DESC,
            columns::DISPLAY_ORDER,
        ],
    },
    RoleColumns {
        role: TableRole::CsTopics,
        columns: &[
            columns::CS_ID,
            columns::CS_NAME,
            columns::CONCENTRATION,
            columns::SHORT_DESC,
        ],
    },
    RoleColumns {
        role: TableRole::Connections,
        columns: &[
            columns::CS_ID,
            columns::CALCULUS_ID,
            columns::STRENGTH,
            columns::RATIONALE,
        ],
    },
    RoleColumns {
        role: TableRole::Prerequisites,
        columns: &[columns::SOURCE_CALCULUS_ID, columns::TARGET_CALCULUS_ID],
    },
];

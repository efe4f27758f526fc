//! CLI response types returned as JSON by `aidev` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::relations::OutputTable;

/// One CSV file written by a run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TableWritten {
    pub table: OutputTable,
    pub path: String,
    pub rows: u64,
}

/// Counters from the linkage and classification step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LabelSummary {
    /// Rows in Task 1.
    pub pull_requests: u64,
    /// Rows produced by the left join, before filtering.
    pub joined_rows: u64,
    /// Joined rows dropped because no task type was recorded.
    pub untyped_rows_dropped: u64,
    /// Pull requests that matched more than one task label.
    pub fanned_out_pull_requests: u64,
    /// Rows in Task 5.
    pub labeled_rows: u64,
    /// Task 5 rows with `SECURITY = 1`.
    pub flagged: u64,
}

/// Response from `aidev run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub output_dir: String,
    pub keyword_set_version: String,
    pub tables: Vec<TableWritten>,
    pub labels: LabelSummary,
}

/// Response from `aidev classify`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassifyResponse {
    pub security: bool,
    pub matched_keywords: Vec<String>,
    pub keyword_set_version: String,
}

/// Response from `aidev keywords`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KeywordsResponse {
    pub version: String,
    pub count: u32,
    pub keywords: Vec<String>,
}

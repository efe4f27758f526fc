use serde::{Deserialize, Serialize};

/// One file touched by one commit of a pull request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitDetail {
    pub sha: String,
    pub pr_id: i64,
    pub message: Option<String>,
    pub filename: Option<String>,
    pub status: Option<String>,
    pub additions: Option<i64>,
    pub deletions: Option<i64>,
    pub changes: Option<i64>,
    /// Unified diff text, unmodified.
    pub patch: Option<String>,
}

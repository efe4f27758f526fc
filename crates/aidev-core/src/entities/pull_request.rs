use serde::{Deserialize, Serialize};

/// A pull request opened by an AI coding agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// Unique within the dataset.
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub agent: String,
    pub repo_id: Option<i64>,
    pub repo_url: Option<String>,
}

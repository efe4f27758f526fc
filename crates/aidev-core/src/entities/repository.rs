use serde::{Deserialize, Serialize};

/// A repository that received agent pull requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub id: i64,
    pub language: Option<String>,
    pub stars: Option<i64>,
    pub url: Option<String>,
}

//! Locations of the four source relations.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DATASET_BASE: &str = "hf://datasets/hao-li/AIDev";

fn dataset_file(name: &str) -> String {
    format!("{DATASET_BASE}/{name}.parquet")
}

fn default_pull_requests() -> String {
    dataset_file("all_pull_request")
}

fn default_repositories() -> String {
    dataset_file("all_repository")
}

fn default_task_types() -> String {
    dataset_file("pr_task_type")
}

fn default_commit_details() -> String {
    dataset_file("pr_commit_details")
}

/// Each value is a local path or a URL DuckDB can scan
/// (`hf://`, `https://`, `s3://`). `.csv` files are read as CSV, anything
/// else as Parquet.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourcesConfig {
    #[serde(default = "default_pull_requests")]
    pub pull_requests: String,

    #[serde(default = "default_repositories")]
    pub repositories: String,

    #[serde(default = "default_task_types")]
    pub task_types: String,

    #[serde(default = "default_commit_details")]
    pub commit_details: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            pull_requests: default_pull_requests(),
            repositories: default_repositories(),
            task_types: default_task_types(),
            commit_details: default_commit_details(),
        }
    }
}

impl SourcesConfig {
    /// All four locations must be set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("sources.pull_requests", &self.pull_requests),
            ("sources.repositories", &self.repositories),
            ("sources.task_types", &self.task_types),
            ("sources.commit_details", &self.commit_details),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "source location must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

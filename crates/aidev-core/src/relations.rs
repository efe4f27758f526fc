//! Output tables and their row types.
//!
//! Every output relation has a fixed file name and a fixed, ordered column
//! list. Row structs serialize with the same column names so JSON and CSV
//! renderings agree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OutputTable
// ---------------------------------------------------------------------------

/// The five relations written by a run, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutputTable {
    PullRequests,
    Repositories,
    TaskTypes,
    CommitDetails,
    SecurityLabels,
}

impl OutputTable {
    /// All tables in the order a run writes them.
    pub const ALL: [Self; 5] = [
        Self::PullRequests,
        Self::Repositories,
        Self::TaskTypes,
        Self::CommitDetails,
        Self::SecurityLabels,
    ];

    /// Table name, also the file stem of the CSV.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PullRequests => "task1_all_pull_request",
            Self::Repositories => "task2_all_repository",
            Self::TaskTypes => "task3_pr_task_type",
            Self::CommitDetails => "task4_pr_commit_details",
            Self::SecurityLabels => "task5_security_label",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }

    /// Header row, in output order.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::PullRequests => &["TITLE", "ID", "AGENTNAME", "BODYSTRING", "REPOID", "REPOURL"],
            Self::Repositories => &["REPOID", "LANG", "STARS", "REPOURL"],
            Self::TaskTypes => &["PRID", "PRTITLE", "PRREASON", "PRTYPE", "CONFIDENCE"],
            Self::CommitDetails => &[
                "PRID",
                "PRSHA",
                "PRCOMMITMESSAGE",
                "PRFILE",
                "PRSTATUS",
                "PRADDS",
                "PRDELSS",
                "PRCHANGECOUNT",
                "PRDIFF",
            ],
            Self::SecurityLabels => &["ID", "AGENT", "TYPE", "CONFIDENCE", "SECURITY"],
        }
    }
}

impl fmt::Display for OutputTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Task 1–4 rows
// ---------------------------------------------------------------------------

/// Task 1: `task1_all_pull_request.csv`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestRow {
    #[serde(rename = "TITLE")]
    pub title: String,
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "AGENTNAME")]
    pub agent_name: String,
    #[serde(rename = "BODYSTRING")]
    pub body: Option<String>,
    #[serde(rename = "REPOID")]
    pub repo_id: Option<i64>,
    #[serde(rename = "REPOURL")]
    pub repo_url: Option<String>,
}

/// Task 2: `task2_all_repository.csv`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryRow {
    #[serde(rename = "REPOID")]
    pub repo_id: i64,
    #[serde(rename = "LANG")]
    pub language: Option<String>,
    #[serde(rename = "STARS")]
    pub stars: Option<i64>,
    #[serde(rename = "REPOURL")]
    pub repo_url: Option<String>,
}

/// Task 3: `task3_pr_task_type.csv`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskTypeRow {
    #[serde(rename = "PRID")]
    pub pr_id: i64,
    #[serde(rename = "PRTITLE")]
    pub pr_title: Option<String>,
    #[serde(rename = "PRREASON")]
    pub pr_reason: Option<String>,
    #[serde(rename = "PRTYPE")]
    pub pr_type: Option<String>,
    #[serde(rename = "CONFIDENCE")]
    pub confidence: Option<f64>,
}

/// Task 4: `task4_pr_commit_details.csv`.
///
/// `diff` holds the sanitized patch (no newlines, tabs, or commas).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitDetailRow {
    #[serde(rename = "PRID")]
    pub pr_id: i64,
    #[serde(rename = "PRSHA")]
    pub sha: String,
    #[serde(rename = "PRCOMMITMESSAGE")]
    pub message: Option<String>,
    #[serde(rename = "PRFILE")]
    pub file: Option<String>,
    #[serde(rename = "PRSTATUS")]
    pub status: Option<String>,
    #[serde(rename = "PRADDS")]
    pub additions: Option<i64>,
    #[serde(rename = "PRDELSS")]
    pub deletions: Option<i64>,
    #[serde(rename = "PRCHANGECOUNT")]
    pub change_count: Option<i64>,
    #[serde(rename = "PRDIFF")]
    pub diff: Option<String>,
}

// ---------------------------------------------------------------------------
// Task 5
// ---------------------------------------------------------------------------

/// Task 5: security label for one (pull request, task label) pair.
///
/// A pull request with several task labels yields several labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecurityLabel {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "AGENT")]
    pub agent: String,
    #[serde(rename = "TYPE")]
    pub task_type: String,
    #[serde(rename = "CONFIDENCE")]
    pub confidence: Option<f64>,
    #[serde(rename = "SECURITY", with = "security_flag")]
    pub security: bool,
}

impl SecurityLabel {
    /// The `SECURITY` column value: exactly 0 or 1.
    #[must_use]
    pub const fn security_flag(&self) -> u8 {
        if self.security { 1 } else { 0 }
    }
}

/// Serializes `bool` as the integer 0/1 used in the CSV output.
mod security_flag {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[allow(clippy::trivially_copy_pass_by_ref)] // serde `with` signature
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::custom(format!(
                "SECURITY must be 0 or 1, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    fn serialized_keys<T: Serialize>(row: &T) -> Vec<String> {
        match serde_json::to_value(row).expect("row serializes") {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected object, got {other}"),
        }
    }

    fn sorted(columns: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = columns.iter().map(ToString::to_string).collect();
        out.sort();
        out
    }

    #[test]
    fn file_names_follow_table_names() {
        assert_eq!(
            OutputTable::SecurityLabels.file_name(),
            "task5_security_label.csv"
        );
        assert_eq!(
            OutputTable::PullRequests.file_name(),
            "task1_all_pull_request.csv"
        );
    }

    #[test]
    fn row_field_names_match_table_columns() {
        let label = SecurityLabel {
            id: 1,
            agent: "agentA".into(),
            task_type: "fix".into(),
            confidence: None,
            security: true,
        };
        let mut keys = serialized_keys(&label);
        keys.sort();
        assert_eq!(keys, sorted(OutputTable::SecurityLabels.columns()));

        let commit = CommitDetailRow {
            pr_id: 1,
            sha: "abc".into(),
            message: None,
            file: None,
            status: None,
            additions: None,
            deletions: None,
            change_count: None,
            diff: None,
        };
        let mut keys = serialized_keys(&commit);
        keys.sort();
        assert_eq!(keys, sorted(OutputTable::CommitDetails.columns()));
    }

    #[test]
    fn security_serializes_as_integer_flag() {
        let label = SecurityLabel {
            id: 2,
            agent: "agentB".into(),
            task_type: "docs".into(),
            confidence: Some(0.5),
            security: false,
        };
        let value = serde_json::to_value(&label).expect("serialize");
        assert_eq!(value["SECURITY"], 0);
        assert_eq!(label.security_flag(), 0);

        let parsed: SecurityLabel = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed, label);
    }

    #[test]
    fn security_rejects_values_other_than_zero_or_one() {
        let value = serde_json::json!({
            "ID": 3, "AGENT": "a", "TYPE": "t", "CONFIDENCE": null, "SECURITY": 2
        });
        assert!(serde_json::from_value::<SecurityLabel>(value).is_err());
    }
}

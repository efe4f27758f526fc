use serde::{Deserialize, Serialize};

/// Task-type classification attached to a pull request.
///
/// `pr_id` is not unique: a pull request may carry zero, one, or several
/// task labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskLabel {
    pub agent: Option<String>,
    pub pr_id: i64,
    pub title: Option<String>,
    pub reason: Option<String>,
    pub task_type: Option<String>,
    /// In `[0, 1]` when recorded. Older dataset versions have no column at all.
    pub confidence: Option<f64>,
}

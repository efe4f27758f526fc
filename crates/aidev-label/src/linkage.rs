//! Left join of Task 1 (pull requests) to Task 3 (task labels).
//!
//! The right side is indexed as a multimap keyed by pull request id, so a
//! pull request with several task labels fans out to one joined row per
//! label. Output order is the Task 1 row order, and within one pull request
//! the Task 3 row order.

use std::collections::HashMap;

use aidev_core::relations::{PullRequestRow, TaskTypeRow};

/// One row of the unfiltered left join.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedRow<'a> {
    pub pull_request: &'a PullRequestRow,
    /// `None` when no task label matched or the matched label has no type.
    pub pr_type: Option<&'a str>,
    pub confidence: Option<f64>,
}

/// A joined row that survived the task-type filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypedJoin<'a> {
    pub pull_request: &'a PullRequestRow,
    pub pr_type: &'a str,
    pub confidence: Option<f64>,
}

/// Counters describing one join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub left_rows: usize,
    pub joined_rows: usize,
    pub untyped_dropped: usize,
    /// Pull requests matching more than one task label.
    pub fanned_out: usize,
}

fn index_by_pr_id(task3: &[TaskTypeRow]) -> HashMap<i64, Vec<&TaskTypeRow>> {
    let mut index: HashMap<i64, Vec<&TaskTypeRow>> = HashMap::new();
    for row in task3 {
        index.entry(row.pr_id).or_default().push(row);
    }
    index
}

/// Left outer join on `Task1.ID == Task3.PRID`.
///
/// Every Task 1 row appears at least once: once per matching Task 3 row, or
/// once with no type and no confidence when nothing matches.
#[must_use]
pub fn left_join<'a>(
    task1: &'a [PullRequestRow],
    task3: &'a [TaskTypeRow],
) -> (Vec<JoinedRow<'a>>, JoinStats) {
    let index = index_by_pr_id(task3);
    let mut joined = Vec::with_capacity(task1.len());
    let mut stats = JoinStats {
        left_rows: task1.len(),
        ..JoinStats::default()
    };

    for pull_request in task1 {
        match index.get(&pull_request.id) {
            Some(matches) => {
                if matches.len() > 1 {
                    stats.fanned_out += 1;
                }
                joined.extend(matches.iter().map(|label| JoinedRow {
                    pull_request,
                    pr_type: label.pr_type.as_deref(),
                    confidence: label.confidence,
                }));
            }
            None => joined.push(JoinedRow {
                pull_request,
                pr_type: None,
                confidence: None,
            }),
        }
    }

    stats.joined_rows = joined.len();
    (joined, stats)
}

/// [`left_join`], keeping only rows with a task type.
///
/// Pull requests without any typed task label disappear from the result.
#[must_use]
pub fn join_and_filter<'a>(
    task1: &'a [PullRequestRow],
    task3: &'a [TaskTypeRow],
) -> (Vec<TypedJoin<'a>>, JoinStats) {
    let (joined, mut stats) = left_join(task1, task3);
    let typed: Vec<TypedJoin<'a>> = joined
        .into_iter()
        .filter_map(|row| {
            row.pr_type.map(|pr_type| TypedJoin {
                pull_request: row.pull_request,
                pr_type,
                confidence: row.confidence,
            })
        })
        .collect();
    stats.untyped_dropped = stats.joined_rows - typed.len();
    (typed, stats)
}

//! Linkage and classification in one call.

use aidev_core::relations::{PullRequestRow, SecurityLabel, TaskTypeRow};
use aidev_core::responses::LabelSummary;

use crate::classify::SecurityClassifier;
use crate::labels::build_security_labels;
use crate::linkage::{JoinStats, join_and_filter};

/// Counters for one labeling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStats {
    pub join: JoinStats,
    pub labeled: usize,
    pub flagged: usize,
}

impl From<LabelStats> for LabelSummary {
    fn from(stats: LabelStats) -> Self {
        let count = |n: usize| u64::try_from(n).unwrap_or(u64::MAX);
        Self {
            pull_requests: count(stats.join.left_rows),
            joined_rows: count(stats.join.joined_rows),
            untyped_rows_dropped: count(stats.join.untyped_dropped),
            fanned_out_pull_requests: count(stats.join.fanned_out),
            labeled_rows: count(stats.labeled),
            flagged: count(stats.flagged),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelOutcome {
    pub labels: Vec<SecurityLabel>,
    pub stats: LabelStats,
}

/// Join Task 1 to Task 3, drop untyped rows, classify, and project to Task 5.
#[must_use]
pub fn label_pull_requests(
    task1: &[PullRequestRow],
    task3: &[TaskTypeRow],
    classifier: &SecurityClassifier,
) -> LabelOutcome {
    let (joined, join) = join_and_filter(task1, task3);
    let labels = build_security_labels(&joined, classifier);
    let flagged = labels.iter().filter(|label| label.security).count();

    let stats = LabelStats {
        join,
        labeled: labels.len(),
        flagged,
    };
    tracing::debug!(
        pull_requests = join.left_rows,
        joined = join.joined_rows,
        untyped_dropped = join.untyped_dropped,
        fanned_out = join.fanned_out,
        labeled = stats.labeled,
        flagged,
        keyword_set = classifier.keywords().version(),
        "labeled pull requests"
    );

    LabelOutcome { labels, stats }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn summary_mirrors_stats() {
        let stats = LabelStats {
            join: JoinStats {
                left_rows: 4,
                joined_rows: 5,
                untyped_dropped: 2,
                fanned_out: 1,
            },
            labeled: 3,
            flagged: 1,
        };
        let summary = LabelSummary::from(stats);
        assert_eq!(
            summary,
            LabelSummary {
                pull_requests: 4,
                joined_rows: 5,
                untyped_rows_dropped: 2,
                fanned_out_pull_requests: 1,
                labeled_rows: 3,
                flagged: 1,
            }
        );
    }

    #[test]
    fn empty_inputs_give_empty_outcome() {
        let outcome = label_pull_requests(&[], &[], &SecurityClassifier::default());
        assert!(outcome.labels.is_empty());
        assert_eq!(outcome.stats, LabelStats::default());
    }
}

//! Projection of classified join rows to Task 5 [`SecurityLabel`]s.

use aidev_core::relations::SecurityLabel;

use crate::classify::SecurityClassifier;
use crate::linkage::TypedJoin;

/// One label per typed join row; nothing is dropped here.
///
/// `confidence` is copied as-is, so an unknown confidence stays unknown.
#[must_use]
pub fn build_security_labels(
    joined: &[TypedJoin<'_>],
    classifier: &SecurityClassifier,
) -> Vec<SecurityLabel> {
    joined
        .iter()
        .map(|row| {
            let pull_request = row.pull_request;
            SecurityLabel {
                id: pull_request.id,
                agent: pull_request.agent_name.clone(),
                task_type: row.pr_type.to_string(),
                confidence: row.confidence,
                security: classifier.classify(&pull_request.title, pull_request.body.as_deref()),
            }
        })
        .collect()
}

//! End-to-end labeling from source entities to Task 5 rows.

use aidev_core::entities::{PullRequest, TaskLabel};
use aidev_core::relations::SecurityLabel;
use aidev_label::projection::{project_pull_requests, project_task_types};
use aidev_label::{KeywordSet, SecurityClassifier, label_pull_requests};
use pretty_assertions::assert_eq;

fn pull_request(id: i64, title: &str, body: Option<&str>, agent: &str) -> PullRequest {
    PullRequest {
        id,
        title: title.to_string(),
        body: body.map(str::to_string),
        agent: agent.to_string(),
        repo_id: Some(1000 + id),
        repo_url: Some(format!("https://api.github.com/repos/acme/r{id}")),
    }
}

fn task_label(pr_id: i64, task_type: Option<&str>, confidence: Option<f64>) -> TaskLabel {
    TaskLabel {
        agent: None,
        pr_id,
        title: None,
        reason: Some("classified by model".to_string()),
        task_type: task_type.map(str::to_string),
        confidence,
    }
}

fn run(prs: &[PullRequest], labels: &[TaskLabel]) -> Vec<SecurityLabel> {
    let task1 = project_pull_requests(prs);
    let task3 = project_task_types(labels);
    label_pull_requests(&task1, &task3, &SecurityClassifier::default()).labels
}

#[test]
fn buffer_overflow_fix_is_flagged() {
    let labels = run(
        &[pull_request(1, "Fix buffer overflow in parser", Some(""), "agentA")],
        &[task_label(1, Some("bugfix"), Some(0.9))],
    );
    assert_eq!(
        labels,
        vec![SecurityLabel {
            id: 1,
            agent: "agentA".into(),
            task_type: "bugfix".into(),
            confidence: Some(0.9),
            security: true,
        }]
    );
}

#[test]
fn docs_update_is_not_flagged() {
    let labels = run(
        &[pull_request(2, "Update docs", Some("typo fix"), "agentB")],
        &[task_label(2, Some("docs"), Some(0.5))],
    );
    assert_eq!(
        labels,
        vec![SecurityLabel {
            id: 2,
            agent: "agentB".into(),
            task_type: "docs".into(),
            confidence: Some(0.5),
            security: false,
        }]
    );
}

#[test]
fn pull_request_without_task_label_is_excluded() {
    let labels = run(
        &[
            pull_request(2, "Update docs", None, "agentB"),
            pull_request(3, "Fix XSS in comments", None, "agentC"),
        ],
        &[task_label(2, Some("docs"), None)],
    );
    assert!(labels.iter().all(|label| label.id != 3));
    assert_eq!(labels.len(), 1);
}

#[test]
fn two_task_labels_fan_out_to_two_rows() {
    let labels = run(
        &[pull_request(7, "Refactor auth", Some("no functional change"), "agentA")],
        &[
            task_label(7, Some("bug"), Some(0.8)),
            task_label(7, Some("security-review"), None),
        ],
    );
    let types: Vec<&str> = labels.iter().map(|l| l.task_type.as_str()).collect();
    assert_eq!(types, vec!["bug", "security-review"]);
    assert!(labels.iter().all(|l| l.id == 7));
}

#[test]
fn unknown_confidence_stays_unknown() {
    let labels = run(
        &[pull_request(4, "Add retry logic", None, "agentD")],
        &[task_label(4, Some("feat"), None)],
    );
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].confidence, None);
    assert!(!labels[0].security);
}

#[test]
fn every_output_row_has_a_type_and_binary_flag() {
    let prs: Vec<PullRequest> = (0..20)
        .map(|i| pull_request(i, &format!("Change {i}"), (i % 3 == 0).then_some("crash fix"), "bot"))
        .collect();
    let task_labels: Vec<TaskLabel> = (0..20)
        .filter(|i| i % 2 == 0)
        .map(|i| task_label(i, (i % 4 == 0).then_some("fix"), Some(0.1)))
        .collect();

    let labels = run(&prs, &task_labels);
    // Ids divisible by 4 carry a type.
    let ids: Vec<i64> = labels.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![0, 4, 8, 12, 16]);
    for label in &labels {
        assert!(!label.task_type.is_empty());
        assert!(label.security_flag() <= 1);
    }
}

#[test]
fn custom_keyword_table_changes_the_verdict() {
    let task1 = project_pull_requests(&[pull_request(5, "Plug memory leak", None, "agentE")]);
    let task3 = project_task_types(&[task_label(5, Some("fix"), Some(0.6))]);

    let builtin = label_pull_requests(&task1, &task3, &SecurityClassifier::default());
    assert!(!builtin.labels[0].security);

    let custom = SecurityClassifier::new(KeywordSet::new("leaks", ["leak"]).unwrap());
    let outcome = label_pull_requests(&task1, &task3, &custom);
    assert!(outcome.labels[0].security);
    assert_eq!(outcome.stats.flagged, 1);
}

//! Column selection and renaming for Task 1–4.
//!
//! No filtering and no computation, except that commit patches are made
//! delimiter-safe with [`sanitize_patch`].

use aidev_core::entities::{CommitDetail, PullRequest, Repository, TaskLabel};
use aidev_core::relations::{CommitDetailRow, PullRequestRow, RepositoryRow, TaskTypeRow};

#[must_use]
pub fn project_pull_requests(pull_requests: &[PullRequest]) -> Vec<PullRequestRow> {
    pull_requests
        .iter()
        .map(|pr| PullRequestRow {
            title: pr.title.clone(),
            id: pr.id,
            agent_name: pr.agent.clone(),
            body: pr.body.clone(),
            repo_id: pr.repo_id,
            repo_url: pr.repo_url.clone(),
        })
        .collect()
}

#[must_use]
pub fn project_repositories(repositories: &[Repository]) -> Vec<RepositoryRow> {
    repositories
        .iter()
        .map(|repo| RepositoryRow {
            repo_id: repo.id,
            language: repo.language.clone(),
            stars: repo.stars,
            repo_url: repo.url.clone(),
        })
        .collect()
}

/// Task labels keep their row order; the linkage step relies on it.
#[must_use]
pub fn project_task_types(labels: &[TaskLabel]) -> Vec<TaskTypeRow> {
    labels
        .iter()
        .map(|label| TaskTypeRow {
            pr_id: label.pr_id,
            pr_title: label.title.clone(),
            pr_reason: label.reason.clone(),
            pr_type: label.task_type.clone(),
            confidence: label.confidence,
        })
        .collect()
}

#[must_use]
pub fn project_commit_details(commits: &[CommitDetail]) -> Vec<CommitDetailRow> {
    commits
        .iter()
        .map(|commit| CommitDetailRow {
            pr_id: commit.pr_id,
            sha: commit.sha.clone(),
            message: commit.message.clone(),
            file: commit.filename.clone(),
            status: commit.status.clone(),
            additions: commit.additions,
            deletions: commit.deletions,
            change_count: commit.changes,
            diff: commit.patch.as_deref().map(sanitize_patch),
        })
        .collect()
}

/// Replace every `\n`, `\r`, `\t`, and `,` with a single space.
///
/// Each character is replaced one-for-one, so `\r\n` becomes two spaces.
#[must_use]
pub fn sanitize_patch(patch: &str) -> String {
    patch.replace(['\n', '\r', '\t', ','], " ")
}

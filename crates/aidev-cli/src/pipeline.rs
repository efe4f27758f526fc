//! Labeling pipeline: load → project → write Task 1–4 → link/classify → write Task 5.
//!
//! Strictly sequential. A failure aborts the run; files already written
//! stay on disk.

use std::path::PathBuf;

use aidev_config::{AidevConfig, SourcesConfig};
use aidev_core::responses::{LabelSummary, RunReport};
use aidev_lake::{CsvSink, SourceReader};
use aidev_label::projection::{
    project_commit_details, project_pull_requests, project_repositories, project_task_types,
};
use aidev_label::{SecurityClassifier, label_pull_requests};
use anyhow::Context;
use chrono::Utc;

/// One configured run.
pub struct LabelingPipeline {
    sources: SourcesConfig,
    output_dir: PathBuf,
    classifier: SecurityClassifier,
}

impl LabelingPipeline {
    pub fn new(config: &AidevConfig, classifier: SecurityClassifier) -> Self {
        Self {
            sources: config.sources.clone(),
            output_dir: PathBuf::from(&config.output.dir),
            classifier,
        }
    }

    /// Execute the run and describe what was written.
    ///
    /// # Errors
    ///
    /// Returns the first schema, I/O, or `DuckDB` failure, with the step that
    /// failed as context.
    pub fn run(&self) -> anyhow::Result<RunReport> {
        let started_at = Utc::now();

        let reader = SourceReader::open().context("failed to open source reader")?;
        let relations = reader
            .load_all(&self.sources)
            .context("failed to load source relations")?;

        let task1 = project_pull_requests(&relations.pull_requests);
        let task2 = project_repositories(&relations.repositories);
        let task3 = project_task_types(&relations.task_labels);
        let task4 = project_commit_details(&relations.commit_details);

        let sink = CsvSink::create(&self.output_dir).with_context(|| {
            format!(
                "failed to prepare output directory {}",
                self.output_dir.display()
            )
        })?;

        let mut tables = Vec::with_capacity(5);
        tables.push(
            sink.write_pull_requests(&task1)
                .context("failed to write task 1")?,
        );
        tables.push(
            sink.write_repositories(&task2)
                .context("failed to write task 2")?,
        );
        tables.push(
            sink.write_task_types(&task3)
                .context("failed to write task 3")?,
        );
        tables.push(
            sink.write_commit_details(&task4)
                .context("failed to write task 4")?,
        );

        let outcome = label_pull_requests(&task1, &task3, &self.classifier);
        tables.push(
            sink.write_security_labels(&outcome.labels)
                .context("failed to write task 5")?,
        );

        let labels = LabelSummary::from(outcome.stats);
        tracing::info!(
            labeled = labels.labeled_rows,
            flagged = labels.flagged,
            untyped_dropped = labels.untyped_rows_dropped,
            "security labeling complete"
        );

        Ok(RunReport {
            started_at,
            finished_at: Utc::now(),
            output_dir: self.output_dir.display().to_string(),
            keyword_set_version: self.classifier.keywords().version().to_string(),
            tables,
            labels,
        })
    }
}

//! Typed scans of the four AIDev source relations.
//!
//! Each read first runs `DESCRIBE` over the scan and fails with
//! [`LakeError::MissingColumn`] if a required column is absent. Values are
//! then selected with explicit casts so Parquet and CSV inputs decode to the
//! same Rust types. CSV cells are scanned as text with no type sniffing, so
//! a title of `t` or a body of `1.50` arrives unchanged.

use aidev_config::SourcesConfig;
use aidev_core::entities::{CommitDetail, PullRequest, Repository, TaskLabel};
use duckdb::Connection;

use crate::{LakeError, quote_ident, quote_literal};

/// How a source location is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Parquet,
    Csv,
}

impl SourceFormat {
    /// `.csv`, `.csv.gz`, and `.tsv` are CSV; everything else is Parquet.
    #[must_use]
    pub fn detect(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.ends_with(".csv") || lower.ends_with(".csv.gz") || lower.ends_with(".tsv") {
            Self::Csv
        } else {
            Self::Parquet
        }
    }

    fn scan(self, location: &str) -> String {
        let quoted = quote_literal(location);
        match self {
            Self::Parquet => format!("read_parquet({quoted})"),
            Self::Csv => format!("read_csv_auto({quoted}, header = true, all_varchar = true)"),
        }
    }
}

fn is_remote(location: &str) -> bool {
    ["hf://", "http://", "https://", "s3://"]
        .iter()
        .any(|scheme| location.starts_with(scheme))
}

/// A column to select, with the SQL type it is cast to.
struct Column {
    name: &'static str,
    sql_type: &'static str,
    required: bool,
}

const fn required(name: &'static str, sql_type: &'static str) -> Column {
    Column {
        name,
        sql_type,
        required: true,
    }
}

const fn optional(name: &'static str, sql_type: &'static str) -> Column {
    Column {
        name,
        sql_type,
        required: false,
    }
}

const PULL_REQUEST_COLUMNS: &[Column] = &[
    required("id", "BIGINT"),
    required("title", "VARCHAR"),
    required("body", "VARCHAR"),
    required("agent", "VARCHAR"),
    required("repo_id", "BIGINT"),
    required("repo_url", "VARCHAR"),
];

const REPOSITORY_COLUMNS: &[Column] = &[
    required("id", "BIGINT"),
    required("language", "VARCHAR"),
    required("stars", "BIGINT"),
    required("url", "VARCHAR"),
];

const TASK_LABEL_COLUMNS: &[Column] = &[
    required("agent", "VARCHAR"),
    required("id", "BIGINT"),
    required("title", "VARCHAR"),
    required("reason", "VARCHAR"),
    required("type", "VARCHAR"),
    optional("confidence", "DOUBLE"),
];

const COMMIT_DETAIL_COLUMNS: &[Column] = &[
    required("sha", "VARCHAR"),
    required("pr_id", "BIGINT"),
    required("message", "VARCHAR"),
    required("filename", "VARCHAR"),
    required("status", "VARCHAR"),
    required("additions", "BIGINT"),
    required("deletions", "BIGINT"),
    required("changes", "BIGINT"),
    required("patch", "VARCHAR"),
];

/// The four loaded relations.
#[derive(Debug, Clone, Default)]
pub struct SourceRelations {
    pub pull_requests: Vec<PullRequest>,
    pub repositories: Vec<Repository>,
    pub task_labels: Vec<TaskLabel>,
    pub commit_details: Vec<CommitDetail>,
}

/// Reads source relations through a private in-memory `DuckDB`.
pub struct SourceReader {
    conn: Connection,
}

impl SourceReader {
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if the in-memory database cannot open.
    pub fn open() -> Result<Self, LakeError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    fn prepare_location(&self, location: &str) -> Result<String, LakeError> {
        if is_remote(location) {
            self.conn.execute_batch("INSTALL httpfs; LOAD httpfs;")?;
        }
        Ok(SourceFormat::detect(location).scan(location))
    }

    /// Column names of the relation at `location`, in source order.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if the location cannot be scanned.
    pub fn columns(&self, location: &str) -> Result<Vec<String>, LakeError> {
        let scan = self.prepare_location(location)?;
        let mut stmt = self
            .conn
            .prepare(&format!("DESCRIBE SELECT * FROM {scan}"))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Build the casted `SELECT` for `columns`, checking presence first.
    ///
    /// Absent optional columns are selected as typed `NULL`.
    fn select_sql(
        &self,
        relation: &str,
        location: &str,
        columns: &[Column],
    ) -> Result<String, LakeError> {
        let present = self.columns(location)?;
        let mut select = Vec::with_capacity(columns.len());

        for column in columns {
            if present.iter().any(|name| name == column.name) {
                select.push(format!(
                    "CAST({} AS {})",
                    quote_ident(column.name),
                    column.sql_type
                ));
            } else if column.required {
                return Err(LakeError::MissingColumn {
                    relation: relation.to_string(),
                    column: column.name.to_string(),
                    location: location.to_string(),
                });
            } else {
                tracing::warn!(
                    relation,
                    column = column.name,
                    "optional column absent; treating every value as unknown"
                );
                select.push(format!("CAST(NULL AS {})", column.sql_type));
            }
        }

        let scan = SourceFormat::detect(location).scan(location);
        Ok(format!("SELECT {} FROM {scan}", select.join(", ")))
    }

    /// Read the `all_pull_request` relation.
    ///
    /// A null title or agent reads as an empty string; a null body stays `None`.
    ///
    /// # Errors
    ///
    /// [`LakeError::MissingColumn`] for an absent column, [`LakeError::DuckDb`]
    /// for scan or cast failures.
    pub fn read_pull_requests(&self, location: &str) -> Result<Vec<PullRequest>, LakeError> {
        let sql = self.select_sql("pull_requests", location, PULL_REQUEST_COLUMNS)?;
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PullRequest {
                    id: row.get(0)?,
                    title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    body: row.get(2)?,
                    agent: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    repo_id: row.get(4)?,
                    repo_url: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(relation = "pull_requests", location, rows = rows.len(), "loaded");
        Ok(rows)
    }

    /// Read the `all_repository` relation.
    ///
    /// # Errors
    ///
    /// As [`Self::read_pull_requests`].
    pub fn read_repositories(&self, location: &str) -> Result<Vec<Repository>, LakeError> {
        let sql = self.select_sql("repositories", location, REPOSITORY_COLUMNS)?;
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Repository {
                    id: row.get(0)?,
                    language: row.get(1)?,
                    stars: row.get(2)?,
                    url: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(relation = "repositories", location, rows = rows.len(), "loaded");
        Ok(rows)
    }

    /// Read the `pr_task_type` relation.
    ///
    /// `confidence` may be missing from the source entirely; every label then
    /// has an unknown confidence.
    ///
    /// # Errors
    ///
    /// As [`Self::read_pull_requests`].
    pub fn read_task_labels(&self, location: &str) -> Result<Vec<TaskLabel>, LakeError> {
        let sql = self.select_sql("task_labels", location, TASK_LABEL_COLUMNS)?;
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(TaskLabel {
                    agent: row.get(0)?,
                    pr_id: row.get(1)?,
                    title: row.get(2)?,
                    reason: row.get(3)?,
                    task_type: row.get(4)?,
                    confidence: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(relation = "task_labels", location, rows = rows.len(), "loaded");
        Ok(rows)
    }

    /// Read the `pr_commit_details` relation.
    ///
    /// # Errors
    ///
    /// As [`Self::read_pull_requests`].
    pub fn read_commit_details(&self, location: &str) -> Result<Vec<CommitDetail>, LakeError> {
        let sql = self.select_sql("commit_details", location, COMMIT_DETAIL_COLUMNS)?;
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CommitDetail {
                    sha: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    pr_id: row.get(1)?,
                    message: row.get(2)?,
                    filename: row.get(3)?,
                    status: row.get(4)?,
                    additions: row.get(5)?,
                    deletions: row.get(6)?,
                    changes: row.get(7)?,
                    patch: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(relation = "commit_details", location, rows = rows.len(), "loaded");
        Ok(rows)
    }

    /// Read all four relations; the first failure aborts.
    ///
    /// # Errors
    ///
    /// As the individual `read_*` methods.
    pub fn load_all(&self, sources: &SourcesConfig) -> Result<SourceRelations, LakeError> {
        Ok(SourceRelations {
            pull_requests: self.read_pull_requests(&sources.pull_requests)?,
            repositories: self.read_repositories(&sources.repositories)?,
            task_labels: self.read_task_labels(&sources.task_types)?,
            commit_details: self.read_commit_details(&sources.commit_details)?,
        })
    }
}

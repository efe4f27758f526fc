//! CSV export of the output tables.
//!
//! Rows are bulk-inserted into an in-memory `DuckDB` with the Appender, then
//! each table is written with `COPY … TO '<file>' (FORMAT CSV, HEADER)`.
//! Nulls and empty strings both become empty fields; fields containing the
//! delimiter, quotes, or newlines are quoted by `DuckDB`.

use std::path::{Path, PathBuf};

use aidev_core::OutputTable;
use aidev_core::relations::{
    CommitDetailRow, PullRequestRow, RepositoryRow, SecurityLabel, TaskTypeRow,
};
use aidev_core::responses::TableWritten;
use duckdb::{Connection, params};

use crate::{LakeError, quote_literal, schemas};

/// Writes output tables as CSV files into one directory.
pub struct CsvSink {
    conn: Connection,
    dir: PathBuf,
}

impl CsvSink {
    /// Create the output directory (if missing) and the staging tables.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::Io`] if the directory cannot be created and
    /// [`LakeError::DuckDb`] if schema creation fails.
    pub fn create(dir: &Path) -> Result<Self, LakeError> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open_in_memory()?;
        for table in OutputTable::ALL {
            conn.execute_batch(&schemas::create_table(table))?;
        }
        Ok(Self {
            conn,
            dir: dir.to_path_buf(),
        })
    }

    /// Where `table` is written.
    #[must_use]
    pub fn path_for(&self, table: OutputTable) -> PathBuf {
        self.dir.join(table.file_name())
    }

    /// Write Task 1.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if staging or the COPY fails.
    pub fn write_pull_requests(&self, rows: &[PullRequestRow]) -> Result<TableWritten, LakeError> {
        let table = OutputTable::PullRequests;
        self.reset(table)?;
        let mut appender = self.conn.appender(table.as_str())?;
        for r in rows {
            appender.append_row(params![r.title, r.id, r.agent_name, r.body, r.repo_id, r.repo_url])?;
        }
        appender.flush()?;
        drop(appender);
        self.export(table, rows.len())
    }

    /// Write Task 2.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if staging or the COPY fails.
    pub fn write_repositories(&self, rows: &[RepositoryRow]) -> Result<TableWritten, LakeError> {
        let table = OutputTable::Repositories;
        self.reset(table)?;
        let mut appender = self.conn.appender(table.as_str())?;
        for r in rows {
            appender.append_row(params![r.repo_id, r.language, r.stars, r.repo_url])?;
        }
        appender.flush()?;
        drop(appender);
        self.export(table, rows.len())
    }

    /// Write Task 3.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if staging or the COPY fails.
    pub fn write_task_types(&self, rows: &[TaskTypeRow]) -> Result<TableWritten, LakeError> {
        let table = OutputTable::TaskTypes;
        self.reset(table)?;
        let mut appender = self.conn.appender(table.as_str())?;
        for r in rows {
            appender.append_row(params![r.pr_id, r.pr_title, r.pr_reason, r.pr_type, r.confidence])?;
        }
        appender.flush()?;
        drop(appender);
        self.export(table, rows.len())
    }

    /// Write Task 4.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if staging or the COPY fails.
    pub fn write_commit_details(
        &self,
        rows: &[CommitDetailRow],
    ) -> Result<TableWritten, LakeError> {
        let table = OutputTable::CommitDetails;
        self.reset(table)?;
        let mut appender = self.conn.appender(table.as_str())?;
        for r in rows {
            appender.append_row(params![
                r.pr_id,
                r.sha,
                r.message,
                r.file,
                r.status,
                r.additions,
                r.deletions,
                r.change_count,
                r.diff
            ])?;
        }
        appender.flush()?;
        drop(appender);
        self.export(table, rows.len())
    }

    /// Write Task 5. `SECURITY` is written as the integer 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if staging or the COPY fails.
    pub fn write_security_labels(
        &self,
        rows: &[SecurityLabel],
    ) -> Result<TableWritten, LakeError> {
        let table = OutputTable::SecurityLabels;
        self.reset(table)?;
        let mut appender = self.conn.appender(table.as_str())?;
        for r in rows {
            appender.append_row(params![
                r.id,
                r.agent,
                r.task_type,
                r.confidence,
                i32::from(r.security_flag())
            ])?;
        }
        appender.flush()?;
        drop(appender);
        self.export(table, rows.len())
    }

    /// Clear staged rows so a table can be rewritten within one sink.
    fn reset(&self, table: OutputTable) -> Result<(), LakeError> {
        self.conn
            .execute_batch(&format!("DELETE FROM {};", table.as_str()))?;
        Ok(())
    }

    fn export(&self, table: OutputTable, rows: usize) -> Result<TableWritten, LakeError> {
        let path = self.path_for(table);
        let path_str = path.to_string_lossy().into_owned();
        self.conn.execute_batch(&format!(
            "COPY (SELECT {} FROM {}) TO {} (FORMAT CSV, HEADER, DELIMITER ',');",
            schemas::export_columns(table),
            table.as_str(),
            quote_literal(&path_str)
        ))?;
        tracing::info!(table = %table, path = %path_str, rows, "wrote");
        Ok(TableWritten {
            table,
            path: path_str,
            rows: u64::try_from(rows).unwrap_or(u64::MAX),
        })
    }
}

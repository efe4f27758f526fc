//! Lake error types.

/// Errors that can occur while loading source relations or writing output.
#[derive(Debug, thiserror::Error)]
pub enum LakeError {
    /// `DuckDB` operation failed (unreadable source, bad cast, failed COPY).
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// A source relation lacks a column the pipeline requires.
    #[error("Source relation '{relation}' at {location} is missing required column '{column}'")]
    MissingColumn {
        /// Relation name (e.g., "pull_requests").
        relation: String,
        /// The absent column.
        column: String,
        /// Where the relation was read from.
        location: String,
    },

    /// I/O error (creating the output directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

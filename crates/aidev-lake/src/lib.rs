//! # aidev-lake
//!
//! `DuckDB` plumbing around the labeling pipeline.
//!
//! - [`source`]: scans the four AIDev source relations (Parquet or CSV,
//!   local or remote) into typed entities, checking required columns first.
//! - [`sink`]: stages output rows in an in-memory `DuckDB` and writes each
//!   table to CSV with `COPY … (FORMAT CSV, HEADER)`.
//!
//! Both sides use a private in-memory connection; nothing is persisted
//! besides the CSV files.

pub mod error;
pub mod schemas;
pub mod sink;
pub mod source;

pub use error::LakeError;
pub use sink::CsvSink;
pub use source::{SourceFormat, SourceReader, SourceRelations};

/// Quote a string as a SQL literal.
pub(crate) fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Quote a SQL identifier.
pub(crate) fn quote_ident(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

//! # aidev-label
//!
//! Turns the loaded AIDev relations into the five output relations:
//! - [`projection`]: column selection and renaming for Task 1–4
//! - [`linkage`]: left join of pull requests to task labels, then the
//!   task-type filter
//! - [`classify`]: keyword substring classifier over title and body
//! - [`labels`]: projection of classified rows to [`SecurityLabel`]
//! - [`engine`]: the three steps above as one call, with counters
//!
//! Everything here is pure and synchronous. The only I/O is reading a
//! replacement keyword table from disk.
//!
//! [`SecurityLabel`]: aidev_core::relations::SecurityLabel

pub mod classify;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod labels;
pub mod linkage;
pub mod projection;

pub use classify::{SecurityClassifier, classify_security};
pub use engine::{LabelOutcome, LabelStats, label_pull_requests};
pub use error::LabelError;
pub use keywords::KeywordSet;
pub use labels::build_security_labels;
pub use linkage::{JoinStats, JoinedRow, TypedJoin, join_and_filter, left_join};

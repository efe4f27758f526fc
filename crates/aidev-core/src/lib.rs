//! # aidev-core
//!
//! Core types shared across the AIDev labeling crates:
//! - Source entities as read from the four dataset relations
//! - Projected output rows and the catalog of output tables
//! - Report types returned as JSON by the `aidev` CLI

pub mod entities;
pub mod relations;
pub mod responses;

pub use relations::OutputTable;

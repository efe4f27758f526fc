//! Source entities for the four AIDev dataset relations.
//!
//! These mirror the columns the loader reads. Values that the dataset may
//! leave empty are `Option`s; `None` means "not recorded", never zero.

mod commit_detail;
mod pull_request;
mod repository;
mod task_label;

pub use commit_detail::CommitDetail;
pub use pull_request::PullRequest;
pub use repository::Repository;
pub use task_label::TaskLabel;

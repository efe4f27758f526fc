//! Output location.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    String::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving the five CSV files. Created if missing.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

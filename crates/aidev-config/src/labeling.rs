//! Keyword classifier configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LabelingConfig {
    /// TOML keyword table replacing the built-in one. Empty means built-in.
    #[serde(default)]
    pub keywords_file: String,
}

impl LabelingConfig {
    #[must_use]
    pub fn keywords_file(&self) -> Option<&str> {
        let path = self.keywords_file.trim();
        (!path.is_empty()).then_some(path)
    }
}

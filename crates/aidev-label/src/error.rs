//! Labeling error types.

/// Errors raised while preparing the classifier.
///
/// The join and classification steps themselves cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    /// A keyword table is unusable (empty, or contains an empty keyword).
    #[error("Invalid keyword set: {0}")]
    InvalidKeywordSet(String),

    /// Keyword table file could not be parsed.
    #[error("Keyword table parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Keyword table file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

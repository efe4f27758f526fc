//! Versioned security keyword tables.
//!
//! The built-in table is [`SECURITY_KEYWORDS_V1`]. A replacement can be
//! loaded from TOML:
//!
//! ```toml
//! version = "v2-local"
//! keywords = ["race", "xss"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::LabelError;

/// Version tag of [`SECURITY_KEYWORDS_V1`].
pub const BUILTIN_VERSION: &str = "v1";

/// Built-in keywords, lowercase, matched as literal substrings.
pub const SECURITY_KEYWORDS_V1: &[&str] = &[
    "race",
    "racy",
    "buffer",
    "overflow",
    "stack",
    "integer",
    "signedness",
    "underflow",
    "improper",
    "unauthenticated",
    "gain access",
    "permission",
    "cross site",
    "css",
    "xss",
    "denial service",
    "dos",
    "crash",
    "deadlock",
    "injection",
    "request forgery",
    "csrf",
    "xsrf",
    "forged",
    "security",
    "vulnerability",
    "vulnerable",
    "exploit",
    "attack",
    "bypass",
    "backdoor",
    "threat",
    "expose",
    "breach",
    "violate",
    "fatal",
    "blacklist",
    "overrun",
    "insecure",
];

#[derive(Debug, Deserialize)]
struct KeywordFile {
    version: String,
    keywords: Vec<String>,
}

/// An ordered, non-empty set of lowercase keywords with a version tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    version: String,
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set, trimming and lowercasing each entry.
    ///
    /// Order is kept; exact duplicates after normalization are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::InvalidKeywordSet`] if the version is blank, the
    /// list is empty, or any keyword is blank. A blank keyword would match
    /// every text.
    pub fn new<I, S>(version: impl Into<String>, keywords: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let version = version.into().trim().to_string();
        if version.is_empty() {
            return Err(LabelError::InvalidKeywordSet(
                "version must not be empty".to_string(),
            ));
        }

        let mut normalized: Vec<String> = Vec::new();
        for (index, keyword) in keywords.into_iter().enumerate() {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(LabelError::InvalidKeywordSet(format!(
                    "keyword #{index} is empty"
                )));
            }
            if !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }

        if normalized.is_empty() {
            return Err(LabelError::InvalidKeywordSet(format!(
                "keyword set '{version}' has no keywords"
            )));
        }

        Ok(Self {
            version,
            keywords: normalized,
        })
    }

    /// The built-in `v1` table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_VERSION.to_string(),
            keywords: SECURITY_KEYWORDS_V1.iter().map(ToString::to_string).collect(),
        }
    }

    /// Parse a TOML keyword table.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Toml`] on malformed TOML and
    /// [`LabelError::InvalidKeywordSet`] on an unusable table.
    pub fn from_toml_str(source: &str) -> Result<Self, LabelError> {
        let file: KeywordFile = toml::from_str(source)?;
        Self::new(file.version, file.keywords)
    }

    /// Read and parse a TOML keyword table from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, LabelError> {
        let source = std::fs::read_to_string(path)?;
        let set = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            version = %set.version,
            keywords = set.len(),
            "loaded keyword table"
        );
        Ok(set)
    }

    /// Load from `path` when given, otherwise the built-in table.
    ///
    /// # Errors
    ///
    /// As [`Self::from_path`].
    pub fn from_optional_path(path: Option<&Path>) -> Result<Self, LabelError> {
        path.map_or_else(|| Ok(Self::builtin()), Self::from_path)
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Always false for a constructed set; kept for the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

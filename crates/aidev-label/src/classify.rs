//! Keyword classifier for pull request text.
//!
//! A pull request is security-relevant when any keyword occurs as a literal
//! substring of its lowercased `"{title} {body}"`. There is no word-boundary
//! check: `dos` matches inside `dossier`.

use crate::keywords::{KeywordSet, SECURITY_KEYWORDS_V1};

/// Lowercased `"{title} {body}"`. A missing body contributes an empty string.
fn searchable_text(title: &str, body: Option<&str>) -> String {
    format!("{title} {}", body.unwrap_or_default()).to_lowercase()
}

/// Classify with the built-in keyword table.
#[must_use]
pub fn classify_security(title: &str, body: Option<&str>) -> bool {
    let text = searchable_text(title, body);
    SECURITY_KEYWORDS_V1
        .iter()
        .any(|keyword| text.contains(keyword))
}

/// Classifier bound to a specific keyword table.
#[derive(Debug, Clone, Default)]
pub struct SecurityClassifier {
    keywords: KeywordSet,
}

impl SecurityClassifier {
    #[must_use]
    pub const fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    #[must_use]
    pub const fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    #[must_use]
    pub fn classify(&self, title: &str, body: Option<&str>) -> bool {
        let text = searchable_text(title, body);
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }

    /// Keywords found in the text, in table order.
    #[must_use]
    pub fn matched_keywords(&self, title: &str, body: Option<&str>) -> Vec<&str> {
        let text = searchable_text(title, body);
        self.keywords
            .iter()
            .filter(|keyword| text.contains(keyword))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("XSS found", None)]
    #[case("Fix Buffer Overflow in parser", Some(""))]
    #[case("Refactor", Some("Prevents a DEADLOCK on shutdown"))]
    #[case("Harden login", Some("blocks CSRF tokens reuse"))]
    #[case("Handle Denial Service case", None)]
    #[case("Update dossier template", None)]
    #[case("Tweak styles.CSS", None)]
    fn flags_keyword_regardless_of_case(#[case] title: &str, #[case] body: Option<&str>) {
        assert!(classify_security(title, body));
        assert!(SecurityClassifier::default().classify(title, body));
    }

    #[rstest]
    #[case("Fix typo in README", Some("Minor wording change"))]
    #[case("Update docs", Some("typo fix"))]
    #[case("", None)]
    #[case("Add retry logic", None)]
    fn leaves_unrelated_text_unflagged(#[case] title: &str, #[case] body: Option<&str>) {
        assert!(!classify_security(title, body));
    }

    #[test]
    fn every_builtin_keyword_is_detected_alone() {
        for keyword in SECURITY_KEYWORDS_V1 {
            let shouted = keyword.to_uppercase();
            assert!(classify_security(&shouted, None), "{keyword} not detected");
        }
    }

    #[test]
    fn missing_body_uses_title_only() {
        assert!(!classify_security("Add retry logic", None));
        assert!(classify_security("Add retry on crash", None));
    }

    #[test]
    fn title_and_body_are_joined_by_a_space() {
        // "gain" ends the title and "access" starts the body.
        assert!(classify_security("users could gain", Some("access to admin")));
    }

    #[test]
    fn custom_table_replaces_builtin() {
        let set = KeywordSet::new("custom", ["leak"]).unwrap();
        let classifier = SecurityClassifier::new(set);
        assert!(classifier.classify("Fix memory LEAK", None));
        assert!(!classifier.classify("Fix buffer overflow", None));
    }

    #[test]
    fn matched_keywords_follow_table_order() {
        let classifier = SecurityClassifier::default();
        let matched =
            classifier.matched_keywords("Fix buffer overflow", Some("stack smashing attack"));
        assert_eq!(matched, vec!["buffer", "overflow", "stack", "attack"]);
        assert!(classifier.matched_keywords("Update docs", None).is_empty());
    }
}

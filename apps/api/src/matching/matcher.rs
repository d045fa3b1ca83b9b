//! Text containment used by the skill, title and education scorers.
//!
//! Default: `SubstringMatcher` (case-insensitive substring test).
//! The engine holds an `Arc<dyn TextMatcher>`, so a tokenizing or stemming
//! matcher can replace it without touching the aggregation.

use std::borrow::Cow;

/// Decides whether `needle` occurs in `haystack`.
pub trait TextMatcher: Send + Sync {
    /// `haystack` may be raw text or the output of `prepare`.
    fn contains(&self, haystack: &str, needle: &str) -> bool;

    /// Normalizes a haystack searched many times, so `contains` can skip that work.
    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    /// Label reported alongside scores, e.g. "substring".
    fn name(&self) -> &'static str;
}

/// Case-insensitive substring containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl TextMatcher for SubstringMatcher {
    fn contains(&self, haystack: &str, needle: &str) -> bool {
        lowercase(haystack).contains(&*lowercase(needle))
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        lowercase(text)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Borrows text that lowercasing would leave unchanged.
fn lowercase(text: &str) -> Cow<'_, str> {
    if text.chars().any(|c| c.is_alphabetic() && !c.is_lowercase()) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_is_case_insensitive() {
        let m = SubstringMatcher;
        assert!(m.contains("Must know Kubernetes", "kubernetes"));
        assert!(m.contains("must know kubernetes", "KUBERNETES"));
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "go" is found inside "good"; the baseline does no tokenizing
        assert!(SubstringMatcher.contains("good communication", "Go"));
    }

    #[test]
    fn test_missing_needle() {
        assert!(!SubstringMatcher.contains("Python and SQL", "Rust"));
    }

    #[test]
    fn test_empty_haystack_never_contains_non_empty_needle() {
        assert!(!SubstringMatcher.contains("", "rust"));
    }

    #[test]
    fn test_prepare_lowercases_once() {
        let prepared = SubstringMatcher.prepare("Must know Kubernetes");
        assert_eq!(prepared, "must know kubernetes");
        assert!(SubstringMatcher.contains(&prepared, "KUBERNETES"));
        assert!(matches!(SubstringMatcher.prepare(&prepared), Cow::Borrowed(_)));
    }

    #[test]
    fn test_lowercase_borrows_when_already_lower() {
        assert!(matches!(lowercase("go, rust & c++"), Cow::Borrowed(_)));
        assert!(matches!(lowercase("Go"), Cow::Owned(_)));
    }

    #[test]
    fn test_matcher_name() {
        assert_eq!(SubstringMatcher.name(), "substring");
    }
}

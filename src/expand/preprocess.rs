//! Lexical preprocessing of search text
//!
//! Produces normalized variants of a text fragment to broaden keyword
//! search recall: the lowercased base form, an article-stripped form,
//! individual keyword tokens, and joined token forms.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Regex pattern for a leading English article followed by whitespace
static ARTICLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:the|a|an)\s+").unwrap());

/// Tokens at or below this length are dropped when splitting into keywords
const MAX_STOPWORD_CHARS: usize = 2;

/// Ordered string set: insertion order preserved, duplicates dropped
#[derive(Debug, Default)]
pub(crate) struct VariantSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl VariantSet {
    /// Create an empty set
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a variant unless an equal string was already added
    pub(crate) fn push(&mut self, variant: impl Into<String>) {
        let variant = variant.into();
        if self.seen.insert(variant.clone()) {
            self.items.push(variant);
        }
    }

    /// Add each variant in order
    pub(crate) fn extend<I>(&mut self, variants: I)
    where
        I: IntoIterator<Item = String>,
    {
        for variant in variants {
            self.push(variant);
        }
    }

    /// Consume the set, returning the variants in insertion order
    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }

    /// Number of variants collected so far
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

/// Generate lexical variants of a text fragment.
///
/// Returns an ordered, deduplicated list containing the lowercased and
/// trimmed base form, the base with a leading article stripped, each
/// whitespace token longer than two characters, and (when more than one
/// token survives) the space-joined and concatenated token forms.
/// Empty input yields no variants; whitespace-only input yields the
/// single empty base variant.
pub fn preprocess_search_text(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let base = text.to_lowercase().trim().to_string();
    let mut variants = VariantSet::new();
    variants.push(base.clone());
    variants.push(ARTICLE_PATTERN.replace(&base, "").into_owned());

    let tokens: Vec<&str> = base
        .split_whitespace()
        .filter(|token| token.chars().count() > MAX_STOPWORD_CHARS)
        .collect();
    for token in &tokens {
        variants.push(token.to_string());
    }

    if tokens.len() > 1 {
        variants.push(tokens.join(" "));
        variants.push(tokens.concat());
    }

    variants.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(preprocess_search_text("").is_empty());
    }

    #[test]
    fn test_base_variant_is_lowercased_and_trimmed() {
        let variants = preprocess_search_text("  Custom Homes  ");
        assert_eq!(variants[0], "custom homes");
    }

    #[test]
    fn test_leading_article_stripped() {
        let variants = preprocess_search_text("The Junction");
        assert!(variants.contains(&"the junction".to_string()));
        assert!(variants.contains(&"junction".to_string()));
    }

    #[test]
    fn test_short_tokens_filtered() {
        let variants = preprocess_search_text("to be or not");
        // "to", "be", "or" are all <= 2 chars; only "not" survives
        assert!(variants.contains(&"not".to_string()));
        assert!(!variants.contains(&"to".to_string()));
        assert!(!variants.contains(&"be".to_string()));
    }

    #[test]
    fn test_joined_forms_for_multiple_tokens() {
        let variants = preprocess_search_text("custom home builds");
        assert!(variants.contains(&"custom home builds".to_string()));
        assert!(variants.contains(&"customhomebuilds".to_string()));
    }

    #[test]
    fn test_single_token_has_no_joined_forms() {
        let variants = preprocess_search_text("junction");
        assert_eq!(variants, vec!["junction".to_string()]);
    }

    #[test]
    fn test_whitespace_only_yields_empty_base() {
        let variants = preprocess_search_text("   ");
        assert_eq!(variants, vec![String::new()]);
    }

    #[test]
    fn test_no_duplicates() {
        let variants = preprocess_search_text("the the junction junction");
        let mut seen = std::collections::HashSet::new();
        for v in &variants {
            assert!(seen.insert(v.clone()), "duplicate variant: {}", v);
        }
    }

    #[test]
    fn test_variant_set_preserves_insertion_order() {
        let mut set = VariantSet::new();
        set.push("b");
        set.push("a");
        set.push("b");
        set.push("c");
        assert_eq!(set.into_vec(), vec!["b", "a", "c"]);
    }
}

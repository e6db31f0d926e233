//! Search query generation
//!
//! Expands one raw user query into an ordered list of candidate search
//! strings for the retrieval backend. Compensates for exact-phrase-match
//! weaknesses by adding subject extractions, word-prefix expansions,
//! domain synonyms, and lexical normalizations of the original query.

use once_cell::sync::Lazy;
use regex::Regex;

use super::preprocess::{preprocess_search_text, VariantSet};
use super::synonyms::SynonymTable;

/// Leading question phrases stripped to expose the query subject
const QUESTION_PREFIXES: &[&str] = &["what is ", "tell me about ", "describe "];

/// Suffixes appended to a question-prefix subject
const QUESTION_SUFFIXES: &[&str] = &[" project", " development"];

/// Suffixes appended to a list/summary/details subject
const LISTING_SUFFIXES: &[&str] = &[" project", " projects"];

/// Ordered rewrite patterns for list/summary/details queries.
/// Tried in order; the first pattern that matches wins.
static LISTING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^(?:list|overview)(?:\s+of)?\s+(.+)$").unwrap(),
        Regex::new(r"^summary\s+of\s+(.+)$").unwrap(),
        Regex::new(r"^(?:project\s+details|details)(?:\s+(?:for|of))?\s+(.+)$").unwrap(),
    ]
});

/// Query expander with a configurable domain synonym table
#[derive(Debug, Clone, Default)]
pub struct QueryExpander {
    synonyms: SynonymTable,
}

impl QueryExpander {
    /// Create an expander with the given synonym table
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    /// The synonym table in use
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Expand a raw user query into an ordered, deduplicated list of
    /// candidate search strings. The original query is always the first
    /// element. Pure and infallible; calling twice with the same input
    /// yields the identical sequence.
    pub fn expand(&self, original_query: &str) -> Vec<String> {
        let lowered = original_query.to_lowercase();
        let trimmed = lowered.trim();

        let mut queries = VariantSet::new();
        queries.push(original_query.to_string());

        queries.extend(self.synonyms.expansions_for(&lowered));

        for prefix in QUESTION_PREFIXES {
            if let Some(subject) = trimmed.strip_prefix(prefix) {
                tracing::debug!(prefix, subject, "question prefix matched");
                queries.push(subject.to_string());
                for suffix in QUESTION_SUFFIXES {
                    queries.push(format!("{subject}{suffix}"));
                }
                break;
            }
        }

        for pattern in LISTING_PATTERNS.iter() {
            if let Some(captures) = pattern.captures(trimmed) {
                let subject = &captures[1];
                tracing::debug!(subject, "listing pattern matched");
                queries.push(subject.to_string());
                for suffix in LISTING_SUFFIXES {
                    queries.push(format!("{subject}{suffix}"));
                }

                // Cumulative word prefixes: "a b c" adds "a b" and "a b c"
                let words: Vec<&str> = subject.split_whitespace().collect();
                if words.len() > 1 {
                    for end in 2..=words.len() {
                        queries.push(words[..end].join(" "));
                    }
                }

                queries.extend(preprocess_search_text(subject));
                break;
            }
        }

        queries.extend(preprocess_search_text(original_query));

        tracing::debug!(total = queries.len(), "query expanded");
        queries.into_vec()
    }
}

/// Expand a query using the default synonym table.
pub fn create_search_queries(original_query: &str) -> Vec<String> {
    QueryExpander::default().expand(original_query)
}

//! qexpand: Search query expansion for retrieval pipelines
//!
//! This library widens a raw natural-language user query into an ordered,
//! deduplicated list of candidate search strings, submitted to a downstream
//! lexical or semantic search backend to improve recall.
//!
//! # Features
//!
//! - Lexical preprocessing (lowercasing, article stripping, keyword
//!   tokenization, joined token forms)
//! - Question-prefix and list/summary/details rewrite rules
//! - Word-prefix expansion of multi-word subjects
//! - Configurable domain synonym table loaded from TOML
//!
//! # Modules
//!
//! - `config`: TOML configuration and path resolution
//! - `expand`: Query preprocessing and expansion

pub mod config;
pub mod expand;

// Re-export commonly used types
pub use config::AppConfig;
pub use expand::{create_search_queries, preprocess_search_text, QueryExpander, SynonymTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_exists() {
        assert_eq!(NAME, "qexpand");
    }
}

//! Query expansion module
//!
//! This module widens a raw user query into candidate search strings
//! before retrieval.

mod preprocess;
mod queries;
mod synonyms;

pub use preprocess::preprocess_search_text;
pub use queries::{create_search_queries, QueryExpander};
pub use synonyms::{SynonymEntry, SynonymTable};

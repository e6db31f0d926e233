//! Domain synonym table
//!
//! Maps trigger substrings to hand-authored alternate queries for topics
//! the deployment's content covers. Kept in configuration so
//! deployment-specific vocabulary stays out of the expansion logic.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// One synonym table entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// Substring matched against the lowercased query
    pub trigger: String,
    /// Alternate queries appended when the trigger matches
    pub expansions: Vec<String>,
}

/// Ordered table of domain synonym entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self {
            entries: vec![SynonymEntry {
                trigger: "junction".to_string(),
                expansions: vec![
                    "the junction".to_string(),
                    "junction development".to_string(),
                    "junction project".to_string(),
                    "junction custom homes".to_string(),
                ],
            }],
        }
    }
}

impl SynonymTable {
    /// Create a table from a list of entries
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        Self { entries }
    }

    /// Create a table with no entries
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in table order
    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    /// Collect expansions from every entry whose trigger occurs in the
    /// lowercased query, in table order.
    pub fn expansions_for(&self, lowered_query: &str) -> Vec<String> {
        let mut expansions = Vec::new();
        for entry in &self.entries {
            if lowered_query.contains(&entry.trigger.to_lowercase()) {
                tracing::debug!(trigger = %entry.trigger, "synonym entry matched");
                expansions.extend(entry.expansions.iter().cloned());
            }
        }
        expansions
    }

    /// Validate the table
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            if entry.trigger.trim().is_empty() {
                return Err(anyhow!("Synonym entry has an empty trigger"));
            }
            if entry.expansions.is_empty() {
                return Err(anyhow!(
                    "Synonym entry '{}' has no expansions",
                    entry.trigger
                ));
            }
        }
        Ok(())
    }
}

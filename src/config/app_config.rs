//! Application configuration module for qexpand
//!
//! Provides TOML-based configuration holding the domain synonym table.
//! Priority: CLI args > QEXPAND_CONFIG environment variable > default path

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::expand::SynonymTable;

use super::path_resolver;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Domain synonym table consulted during query expansion
    #[serde(default)]
    synonyms: SynonymTable,
}

impl AppConfig {
    /// Create config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| anyhow!("Failed to parse config file: {}", e))?;
        Ok(config)
    }

    /// Load the configuration.
    ///
    /// Resolution order:
    /// 1. QEXPAND_CONFIG environment variable, if set
    /// 2. The default config path, if the file exists
    /// 3. Built-in defaults
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("QEXPAND_CONFIG") {
            let resolved = path_resolver::resolve_path(&path)?;
            return Self::from_file(&resolved);
        }

        let default_path = path_resolver::get_default_config_path();
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "loading config file");
            return Self::from_file(&default_path);
        }

        Ok(Self::default())
    }

    /// Replace the synonym table
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.synonyms.validate()
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    // Getters
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::SynonymEntry;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.synonyms().entries().len(), 1);
    }

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let config = AppConfig::default();
        let toml_content = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&toml_content).unwrap();
        assert_eq!(parsed.synonyms(), config.synonyms());
    }

    #[test]
    fn test_validate_rejects_bad_synonyms() {
        let table = SynonymTable::new(vec![SynonymEntry {
            trigger: String::new(),
            expansions: vec!["x".to_string()],
        }]);
        let config = AppConfig::default().with_synonyms(table);
        assert!(config.validate().is_err());
    }
}

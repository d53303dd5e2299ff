//! Rule configuration
//!
//! This module defines the TOML schema for classifier and splitter rules,
//! plus the built-in default embedded at compile time.

use crate::error::ConfigError;
use crate::rules::RuleTables;
use crate::splitter::SentenceSplitter;
use serde::{Deserialize, Serialize};
use std::path::Path;

const EMBEDDED_DEFAULT: &str = include_str!("../configs/default.toml");

/// Root rule configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    pub rules: Rules,
    #[serde(default)]
    pub splitter: Splitter,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Exclusion vocabularies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub exclude_previous: Vec<String>,
    #[serde(default)]
    pub exclude_next: Vec<String>,
}

/// Sentence splitter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
    #[serde(default = "default_abbreviations")]
    pub abbreviations: Vec<String>,
}

impl Default for Splitter {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            abbreviations: default_abbreviations(),
        }
    }
}

fn default_terminators() -> Vec<char> {
    crate::splitter::DEFAULT_TERMINATORS.to_vec()
}

fn default_abbreviations() -> Vec<String> {
    crate::splitter::DEFAULT_ABBREVIATIONS
        .iter()
        .map(|a| a.to_string())
        .collect()
}

impl RulesConfig {
    /// The built-in configuration
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_DEFAULT)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, optionally overriding its name
    pub fn from_file(path: &Path, name: Option<&str>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: RulesConfig = toml::from_str(&content)?;
        if let Some(name) = name {
            config.metadata.name = name.to_string();
        }

        config.validate()?;
        log::info!(
            "Loaded rule configuration '{}' from {}",
            config.metadata.name,
            path.display()
        );
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "metadata.name must not be empty".to_string(),
            ));
        }

        // Tokens are runs of letters, so anything else could never match
        let words = self
            .rules
            .exclude_previous
            .iter()
            .map(|w| ("rules.exclude_previous", w))
            .chain(self.rules.exclude_next.iter().map(|w| ("rules.exclude_next", w)));
        for (field, word) in words {
            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                return Err(ConfigError::Invalid(format!(
                    "{field} entry {word:?} is not a single alphabetic word"
                )));
            }
        }

        if self.splitter.terminators.is_empty() {
            return Err(ConfigError::Invalid(
                "splitter.terminators must not be empty".to_string(),
            ));
        }
        if let Some(ws) = self.splitter.terminators.iter().find(|c| c.is_whitespace()) {
            return Err(ConfigError::Invalid(format!(
                "splitter.terminators contains whitespace {ws:?}"
            )));
        }

        Ok(())
    }

    /// Build the classifier's rule tables
    pub fn rule_tables(&self) -> RuleTables {
        RuleTables::new(&self.rules.exclude_previous, &self.rules.exclude_next)
    }

    /// Build the sentence splitter
    pub fn sentence_splitter(&self) -> SentenceSplitter {
        SentenceSplitter::new(
            self.splitter.terminators.clone(),
            &self.splitter.abbreviations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DEFAULT_EXCLUDE_NEXT, DEFAULT_EXCLUDE_PREVIOUS};

    #[test]
    fn test_embedded_matches_builtin_defaults() {
        let config = RulesConfig::embedded().unwrap();
        assert_eq!(config.metadata.name, "default");
        assert_eq!(
            config.rule_tables(),
            RuleTables::new(DEFAULT_EXCLUDE_PREVIOUS, DEFAULT_EXCLUDE_NEXT)
        );
        assert_eq!(config.sentence_splitter(), SentenceSplitter::default());
    }

    #[test]
    fn test_minimal_config() {
        let config = RulesConfig::from_toml_str(
            r#"
[metadata]
name = "bare"

[rules]
"#,
        )
        .unwrap();
        assert_eq!(config.rule_tables(), RuleTables::empty());
        assert_eq!(config.splitter.terminators, vec!['.', '?']);
        assert_eq!(config.sentence_splitter(), SentenceSplitter::default());

        let sentences: Vec<_> = config
            .sentence_splitter()
            .split("Ask Mrs. Jones about the set list.")
            .map(str::to_string)
            .collect();
        assert_eq!(sentences, vec!["Ask Mrs. Jones about the set list."]);
    }

    #[test]
    fn test_rejects_multiword_rule() {
        let err = RulesConfig::from_toml_str(
            r#"
[metadata]
name = "broken"

[rules]
exclude_next = ["set up"]
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("rules.exclude_next"));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = RulesConfig::from_toml_str(
            r#"
[metadata]
name = "  "

[rules]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_terminators() {
        let err = RulesConfig::from_toml_str(
            r#"
[metadata]
name = "x"

[rules]

[splitter]
terminators = []
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("terminators"));
    }

    #[test]
    fn test_parse_error() {
        let err = RulesConfig::from_toml_str("[metadata\nname = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_with_name_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, EMBEDDED_DEFAULT).unwrap();

        let config = RulesConfig::from_file(&path, Some("custom")).unwrap();
        assert_eq!(config.metadata.name, "custom");
    }

    #[test]
    fn test_from_missing_file() {
        let err = RulesConfig::from_file(Path::new("/nonexistent/rules.toml"), None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

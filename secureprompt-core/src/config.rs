//! Configuration management for `secureprompt-core`.
//!
//! This module defines the keyword dictionary and the structural pattern rules
//! that a checker is built from. It handles deserialization of YAML
//! configurations and provides utilities for loading, merging, and validating
//! them.
//!
//! A keyword may be written either as a bare string or as a mapping:
//!
//! ```yaml
//! keywords:
//!   - password
//!   - keyword: credit card
//!     label: "[CARD_REFERENCE]"
//! patterns:
//!   - name: email_address
//!     pattern: '[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}'
//!     replace_with: "[MAIL_ADDRESS]"
//! ```
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::matcher::fold_str;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// One entry of the keyword dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KeywordSpec")]
pub struct KeywordEntry {
    /// The keyword itself. Matching is case-insensitive.
    pub keyword: String,
    /// Replacement label; defaults to the upper-cased keyword in brackets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Explicit override for enabling/disabling the keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The two accepted spellings of a keyword entry. Anything else (numbers,
/// booleans, nested lists) fails to deserialize.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordSpec {
    Plain(String),
    Detailed {
        keyword: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        enabled: Option<bool>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl From<KeywordSpec> for KeywordEntry {
    fn from(spec: KeywordSpec) -> Self {
        match spec {
            KeywordSpec::Plain(keyword) => KeywordEntry::new(keyword),
            KeywordSpec::Detailed { keyword, label, enabled, description } => KeywordEntry {
                label,
                enabled,
                description,
                ..KeywordEntry::new(keyword)
            },
        }
    }
}

impl KeywordEntry {
    /// Creates an entry. Surrounding whitespace is not part of the keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        let keyword: String = keyword.into();
        Self {
            keyword: keyword.trim().to_string(),
            label: None,
            enabled: None,
            description: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// A regex rule used by the structural pattern sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PatternRule {
    /// Unique identifier for the rule (e.g., "email_address").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: String,
    /// The literal label every match is replaced with.
    pub replace_with: String,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, matches must also pass a programmatic check (checksum, date fields).
    pub programmatic_validation: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for PatternRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            replace_with: "[REDACTED]".to_string(),
            multiline: false,
            programmatic_validation: false,
            enabled: None,
        }
    }
}

impl PatternRule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, replace_with: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replace_with: replace_with.into(),
            ..Default::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Top-level configuration: the keyword dictionary plus pattern rules.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SecurePromptConfig {
    /// Ordered keyword dictionary.
    pub keywords: Vec<KeywordEntry>,
    /// Regex rules for structural sensitive data.
    pub patterns: Vec<PatternRule>,
}

impl SecurePromptConfig {
    /// Builds a configuration from a flat keyword list with no pattern rules.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(KeywordEntry::new).collect(),
            patterns: Vec::new(),
        }
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: SecurePromptConfig =
            serde_yml::from_str(text).context("Failed to parse configuration")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!(
            "Loaded {} keywords and {} pattern rules from file {}.",
            config.keywords.len(),
            config.patterns.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the embedded default dictionary and pattern rules.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_keywords.yaml");
        let config = Self::from_yaml_str(default_yaml).context("Failed to parse default configuration")?;

        debug!(
            "Loaded {} default keywords and {} default pattern rules.",
            config.keywords.len(),
            config.patterns.len()
        );
        Ok(config)
    }

    /// Enabled keyword entries in dictionary order.
    pub fn active_keywords(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.keywords.iter().filter(|entry| entry.is_enabled())
    }

    /// Enabled pattern rules in declaration order.
    pub fn active_patterns(&self) -> impl Iterator<Item = &PatternRule> {
        self.patterns.iter().filter(|rule| rule.is_enabled())
    }
}

/// Merges a user configuration over the defaults.
///
/// A user keyword that folds to an existing keyword replaces that entry in
/// place; new keywords are appended. Pattern rules are replaced by name in
/// place; new rules are appended.
pub fn merge_config(
    default_config: SecurePromptConfig,
    user_config: Option<SecurePromptConfig>,
) -> SecurePromptConfig {
    let mut merged = default_config;
    let Some(user_cfg) = user_config else {
        debug!("No user config provided, using {} default keywords.", merged.keywords.len());
        return merged;
    };

    debug!(
        "Merging {} user keywords and {} user pattern rules.",
        user_cfg.keywords.len(),
        user_cfg.patterns.len()
    );

    for entry in user_cfg.keywords {
        let folded = fold_str(entry.keyword.trim());
        match merged.keywords.iter_mut().find(|existing| fold_str(existing.keyword.trim()) == folded) {
            Some(existing) => *existing = entry,
            None => merged.keywords.push(entry),
        }
    }

    for rule in user_cfg.patterns {
        match merged.patterns.iter_mut().find(|existing| existing.name == rule.name) {
            Some(existing) => *existing = rule,
            None => merged.patterns.push(rule),
        }
    }

    debug!(
        "Final configuration after merge: {} keywords, {} pattern rules.",
        merged.keywords.len(),
        merged.patterns.len()
    );
    merged
}

/// Validates keyword and rule integrity, reporting every problem at once.
pub fn validate_config(config: &SecurePromptConfig) -> Result<()> {
    let mut errors = Vec::new();

    for (index, entry) in config.keywords.iter().enumerate() {
        if entry.keyword.trim().is_empty() {
            errors.push(format!("Keyword entry #{} is empty.", index));
        }
        if let Some(label) = &entry.label {
            if label.is_empty() {
                errors.push(format!("Keyword '{}' has an empty `label`.", entry.keyword));
            }
        }
    }

    let mut rule_names = HashSet::new();
    for rule in &config.patterns {
        if rule.name.is_empty() {
            errors.push("A pattern rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate pattern rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }
        if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
    }
}

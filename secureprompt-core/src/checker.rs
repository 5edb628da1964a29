// secureprompt-core/src/checker.rs
//! The prompt checker: classifies prompts and produces the externally
//! visible result record.
//!
//! A [`PromptChecker`] owns the compiled keyword automaton, the label table
//! and the structural pattern sanitizer. It is built once from a
//! [`SecurePromptConfig`] and then only read; wrap it in an `Arc` to share it
//! between request handlers.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::fmt;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SecurePromptConfig;
use crate::engine::SanitizationEngine;
use crate::errors::SecurePromptError;
use crate::matcher::{fold_str, Automaton};
use crate::redaction_match::{default_label, KeywordMatch, RedactionSpan};
use crate::sanitizers::keyword::{keyword_spans, redact_with};
use crate::sanitizers::pattern::PatternSanitizer;
use crate::sanitizers::spans::apply_spans;

/// Prefix of the passthrough placeholder returned for SAFE prompts.
pub const PASSTHROUGH_PREFIX: &str = "LLM response: ";

/// Classification of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Safe,
    Sensitive,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Sensitive => write!(f, "SENSITIVE"),
        }
    }
}

/// The outcome of a check. `response` is only present for SAFE prompts and
/// is omitted from the serialized form otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: Status,
    pub matches: Vec<KeywordMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl CheckResult {
    /// A SAFE result carrying the passthrough response for `prompt`.
    pub fn safe(prompt: &str) -> Self {
        Self {
            status: Status::Safe,
            matches: Vec::new(),
            response: Some(passthrough_response(prompt)),
        }
    }

    pub fn sensitive(matches: Vec<KeywordMatch>) -> Self {
        Self {
            status: Status::Sensitive,
            matches,
            response: None,
        }
    }

    pub fn is_sensitive(&self) -> bool {
        self.status == Status::Sensitive
    }
}

/// Placeholder standing in for the downstream model's answer.
pub fn passthrough_response(prompt: &str) -> String {
    format!("{}{}", PASSTHROUGH_PREFIX, prompt)
}

/// Keyword automaton plus structural rules, built once and shared read-only.
#[derive(Debug)]
pub struct PromptChecker {
    automaton: Automaton,
    /// Folded keyword to replacement label, for keywords with a custom label.
    labels: HashMap<String, String>,
    pattern_sanitizer: PatternSanitizer,
}

impl PromptChecker {
    /// Builds a checker from the active entries of `config`.
    pub fn new(config: &SecurePromptConfig) -> Result<Self, SecurePromptError> {
        let mut keywords = Vec::with_capacity(config.keywords.len());
        let mut labels = HashMap::new();

        for (index, entry) in config.active_keywords().enumerate() {
            let keyword = entry.keyword.trim();
            if keyword.is_empty() {
                return Err(SecurePromptError::EmptyKeyword(index));
            }
            if let Some(label) = &entry.label {
                labels.entry(fold_str(keyword)).or_insert_with(|| label.clone());
            }
            keywords.push(keyword);
        }
        debug!(
            "{} of {} keyword entries enabled.",
            keywords.len(),
            config.keywords.len()
        );

        let automaton = Automaton::build(&keywords);
        let rules: Vec<_> = config.active_patterns().cloned().collect();
        let pattern_sanitizer = PatternSanitizer::new(&rules)?;
        pattern_sanitizer.ensure_labels_clean(&automaton)?;

        debug!(
            "PromptChecker ready: {} keywords, {} states, {} pattern rules.",
            automaton.len(),
            automaton.state_count(),
            pattern_sanitizer.rule_count()
        );

        Ok(Self {
            automaton,
            labels,
            pattern_sanitizer,
        })
    }

    /// Builds a keyword-only checker with default labels and no pattern rules.
    pub fn with_keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            automaton: Automaton::build(keywords),
            labels: HashMap::new(),
            pattern_sanitizer: PatternSanitizer::default(),
        }
    }

    /// Builds a checker from the embedded default configuration.
    pub fn with_default_config() -> Result<Self> {
        let config = SecurePromptConfig::load_default()?;
        Self::new(&config).context("Failed to build checker from default configuration")
    }

    /// Label used to replace `keyword`.
    pub fn label_for(&self, keyword: &str) -> String {
        self.labels
            .get(&fold_str(keyword))
            .cloned()
            .unwrap_or_else(|| default_label(keyword))
    }

    pub fn pattern_sanitizer(&self) -> &PatternSanitizer {
        &self.pattern_sanitizer
    }
}

impl SanitizationEngine for PromptChecker {
    fn check(&self, prompt: &str) -> CheckResult {
        if prompt.trim().is_empty() {
            debug!("Empty prompt, classifying as SAFE.");
            return CheckResult::safe(prompt);
        }

        let matches = self.automaton.scan(prompt);
        if matches.is_empty() {
            debug!("No keywords found in prompt of {} chars.", prompt.chars().count());
            return CheckResult::safe(prompt);
        }

        for m in &matches {
            debug!("Keyword '{}' found at position {}.", m.keyword, m.position);
        }
        debug!("Prompt classified as SENSITIVE with {} matches.", matches.len());
        CheckResult::sensitive(matches)
    }

    fn is_sensitive(&self, prompt: &str) -> bool {
        self.automaton.quick_contains(prompt)
    }

    fn redact(&self, prompt: &str, matches: &[KeywordMatch]) -> String {
        redact_with(prompt, matches, |keyword| self.label_for(keyword))
    }

    fn sanitize(&self, prompt: &str) -> String {
        let matches = self.automaton.scan(prompt);
        let mut spans = keyword_spans(prompt, &matches, |keyword| self.label_for(keyword));
        spans.extend(
            self.pattern_sanitizer
                .find(prompt)
                .into_iter()
                .map(RedactionSpan::from),
        );
        apply_spans(prompt, spans)
    }

    fn keywords(&self) -> &[String] {
        self.automaton.patterns()
    }
}

// secureprompt-core/src/redaction_match.rs
//! Provides core data structures for reporting keyword matches and redaction
//! spans, plus helpers for logging sensitive content safely.

use serde::{Deserialize, Serialize};
use log::debug;

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("SECUREPROMPT_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single keyword occurrence reported by the automaton.
///
/// `position` is the character offset in the original text where the first
/// character of `keyword` occurs. `keyword` is the lower-cased dictionary
/// entry, not the text as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub position: usize,
}

impl KeywordMatch {
    pub fn new(keyword: impl Into<String>, position: usize) -> Self {
        Self { keyword: keyword.into(), position }
    }

    /// Length of the matched span in characters.
    pub fn char_len(&self) -> usize {
        self.keyword.chars().count()
    }
}

/// A structural match found by the pattern sanitizer. Offsets are bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_name: String,
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// A byte range of the original text and the label that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionSpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl RedactionSpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self { start, end, label: label.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Finding> for RedactionSpan {
    fn from(finding: Finding) -> Self {
        Self::new(finding.start, finding.end, finding.replacement)
    }
}

/// Derives the default category label for a keyword.
///
/// `credit card` becomes `[CREDIT_CARD]`: upper-cased, with every
/// non-alphanumeric character replaced by `_`.
pub fn default_label(keyword: &str) -> String {
    let body: String = keyword
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .flat_map(char::to_uppercase)
        .collect();
    format!("[{}]", body)
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_redaction_action_debug(
    module_path: &str,
    original_sensitive_content: &str,
    sanitized_replacement: &str,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}'",
        module_path,
        get_loggable_content(original_sensitive_content),
        sanitized_replacement,
    );
}

pub fn log_skipped_match_debug(module_path: &str, reason: &str, m: &KeywordMatch) {
    debug!(
        "{} Skipping match for '{}' at {}: {}",
        module_path,
        m.keyword,
        m.position,
        reason
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_default_label() {
        assert_eq!(default_label("password"), "[PASSWORD]");
        assert_eq!(default_label("credit card"), "[CREDIT_CARD]");
        assert_eq!(default_label("api-key"), "[API_KEY]");
    }

    #[test]
    fn test_keyword_match_serializes_as_keyword_and_position() {
        let json = serde_json::to_value(KeywordMatch::new("password", 11)).unwrap();
        assert_eq!(json, serde_json::json!({"keyword": "password", "position": 11}));
    }
}

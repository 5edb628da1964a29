//! pattern.rs - Regex-based redaction of structural sensitive data.
//!
//! Keyword matching only finds the words that announce sensitive data
//! ("password", "phone"). This pass finds the data itself by shape: mail
//! addresses, phone numbers, government and card numbers. Rules are compiled
//! once; matches that need more than a shape check go through
//! [`crate::validators`].
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{PatternRule, MAX_PATTERN_LENGTH};
use crate::errors::SecurePromptError;
use crate::matcher::Automaton;
use crate::redaction_match::{Finding, RedactionSpan};
use crate::sanitizers::spans::apply_spans;
use crate::validators;

/// A single compiled pattern rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The label matches of this rule are replaced with.
    pub replace_with: String,
    /// The unique name of the rule.
    pub name: String,
    /// Whether matches must also pass a programmatic validator.
    pub programmatic_validation: bool,
}

/// Compiles rules into [`CompiledRule`]s, skipping disabled ones.
///
/// Every failing rule is collected before returning so a configuration with
/// several mistakes is reported in one go.
pub fn compile_rules(rules: &[PatternRule]) -> Result<Vec<CompiledRule>, SecurePromptError> {
    debug!("Starting compilation of {} pattern rules.", rules.len());

    let mut compiled_rules = Vec::with_capacity(rules.len());
    let mut compilation_errors = Vec::new();

    for rule in rules.iter().filter(|rule| rule.is_enabled()) {
        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(SecurePromptError::PatternLengthExceeded(
                rule.name.clone(),
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(&rule.pattern)
            .multi_line(rule.multiline)
            .size_limit(10 * (1 << 20))
            .build();

        match regex_result {
            Ok(regex) => {
                debug!("Rule '{}' compiled successfully.", rule.name);
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with.clone(),
                    name: rule.name.clone(),
                    programmatic_validation: rule.programmatic_validation,
                });
            }
            Err(e) => {
                compilation_errors.push(SecurePromptError::RuleCompilationError(rule.name.clone(), e));
            }
        }
    }

    if compilation_errors.is_empty() {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(compiled_rules)
    } else {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(SecurePromptError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    }
}

/// Regex-driven sanitizer for structural sensitive data.
#[derive(Debug, Default)]
pub struct PatternSanitizer {
    rules: Vec<CompiledRule>,
}

impl PatternSanitizer {
    /// Compiles `rules` into a sanitizer.
    pub fn new(rules: &[PatternRule]) -> Result<Self, SecurePromptError> {
        Ok(Self { rules: compile_rules(rules)? })
    }

    /// Rejects any replacement label that `automaton` would flag.
    ///
    /// Redacted output must not reintroduce a monitored keyword, otherwise a
    /// second check of sanitized text would report the labels themselves.
    pub fn ensure_labels_clean(&self, automaton: &Automaton) -> Result<(), SecurePromptError> {
        match self.rules.iter().find(|rule| automaton.quick_contains(&rule.replace_with)) {
            Some(rule) => Err(SecurePromptError::FlaggedReplacement(
                rule.name.clone(),
                rule.replace_with.clone(),
            )),
            None => Ok(()),
        }
    }

    fn run_programmatic_validator(&self, rule: &CompiledRule, matched: &str) -> bool {
        if !rule.programmatic_validation {
            return true;
        }
        match rule.name.as_str() {
            "us_ssn" => validators::is_valid_ssn_programmatically(matched),
            "national_id" => validators::is_valid_nik_programmatically(matched),
            "credit_card" => validators::is_valid_credit_card_programmatically(matched),
            _ => true,
        }
    }

    /// Every validated match of every rule, ordered by start offset.
    ///
    /// For a shared start, findings keep rule declaration order.
    pub fn find(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in &self.rules {
            for m in rule.regex.find_iter(text) {
                if !self.run_programmatic_validator(rule, m.as_str()) {
                    debug!("Rule '{}' match at {} failed validation.", rule.name, m.start());
                    continue;
                }
                findings.push(Finding {
                    rule_name: rule.name.clone(),
                    start: m.start(),
                    end: m.end(),
                    replacement: rule.replace_with.clone(),
                });
            }
        }
        findings.sort_by_key(|finding| finding.start);
        findings
    }

    /// Applies only this pass to `text`.
    pub fn redact_patterns(&self, text: &str) -> String {
        let spans: Vec<RedactionSpan> = self.find(text).into_iter().map(RedactionSpan::from).collect();
        apply_spans(text, spans)
    }

    /// Names of the compiled (enabled) rules.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

// secureprompt-core/src/headless.rs
//! Convenience wrappers for one-shot use of the checker.
//!
//! Each call builds a fresh [`PromptChecker`]; long-running callers should
//! build one checker at startup and keep it instead.

use anyhow::{Context, Result};

use crate::checker::{CheckResult, PromptChecker};
use crate::config::SecurePromptConfig;
use crate::engine::SanitizationEngine;

/// Builds a checker from `config` and classifies `prompt`.
pub fn headless_check_prompt(config: &SecurePromptConfig, prompt: &str) -> Result<CheckResult> {
    let checker = PromptChecker::new(config).context("Failed to build prompt checker")?;
    Ok(checker.check(prompt))
}

/// Builds a checker from `config` and returns the fully sanitized `prompt`.
pub fn headless_sanitize_string(config: &SecurePromptConfig, prompt: &str) -> Result<String> {
    let checker = PromptChecker::new(config).context("Failed to build prompt checker")?;
    Ok(checker.sanitize(prompt))
}

// secureprompt/src/commands/sanitize.rs
//! `secureprompt sanitize`: rewrite a prompt with sensitive spans replaced.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use secureprompt_core::SanitizationEngine;

/// Options for a sanitize run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SanitizeOptions {
    /// Skip the structural pattern rules.
    pub keywords_only: bool,
}

/// Sanitizes `prompt` and writes the result, followed by a newline, to `out`.
pub fn run_sanitize<W: Write>(
    engine: &dyn SanitizationEngine,
    prompt: &str,
    opts: SanitizeOptions,
    out: &mut W,
) -> Result<String> {
    info!("Starting sanitize operation.");
    let sanitized = if opts.keywords_only {
        let result = engine.check(prompt);
        engine.redact(prompt, &result.matches)
    } else {
        engine.sanitize(prompt)
    };

    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        prompt.len(),
        sanitized.len()
    );
    writeln!(out, "{}", sanitized).context("Failed to write sanitized output")?;
    Ok(sanitized)
}

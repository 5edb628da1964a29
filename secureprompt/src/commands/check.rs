// secureprompt/src/commands/check.rs
//! `secureprompt check`: classify a prompt and print the result as JSON.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use secureprompt_core::{CheckResult, SanitizationEngine};

/// Process exit status for a SENSITIVE verdict under `--fail-on-sensitive`.
pub const SENSITIVE_EXIT_CODE: i32 = 2;

/// Checks `prompt` and writes the JSON result to `out`.
pub fn run_check<W: Write>(
    engine: &dyn SanitizationEngine,
    prompt: &str,
    compact: bool,
    out: &mut W,
) -> Result<CheckResult> {
    info!("Starting check operation.");
    let result = engine.check(prompt);
    debug!("Prompt classified as {} with {} matches.", result.status, result.matches.len());

    let json = if compact {
        serde_json::to_string(&result)
    } else {
        serde_json::to_string_pretty(&result)
    }
    .context("Failed to serialize check result")?;
    writeln!(out, "{}", json)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secureprompt_core::{PromptChecker, Status};

    #[test]
    fn test_compact_sensitive_output() {
        let checker = PromptChecker::with_keywords(&["password"]);
        let mut out = Vec::new();
        let result = run_check(&checker, "What is my password?", true, &mut out).unwrap();
        assert_eq!(result.status, Status::Sensitive);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"status\":\"SENSITIVE\",\"matches\":[{\"keyword\":\"password\",\"position\":11}]}\n"
        );
    }

    #[test]
    fn test_pretty_safe_output_parses() {
        let checker = PromptChecker::with_keywords(&["password"]);
        let mut out = Vec::new();
        run_check(&checker, "Hello", false, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "SAFE");
        assert_eq!(value["response"], "LLM response: Hello");
    }
}

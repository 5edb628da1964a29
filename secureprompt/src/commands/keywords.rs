// secureprompt/src/commands/keywords.rs
//! `secureprompt keywords`: list the active dictionary.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use secureprompt_core::SanitizationEngine;

#[derive(Debug, Serialize)]
struct KeywordsReport<'a> {
    keywords: &'a [String],
    count: usize,
}

/// Writes `{"keywords":[...],"count":N}` for the engine's dictionary.
pub fn run_keywords<W: Write>(engine: &dyn SanitizationEngine, out: &mut W) -> Result<()> {
    let keywords = engine.keywords();
    let report = KeywordsReport { keywords, count: keywords.len() };
    let json = serde_json::to_string(&report).context("Failed to serialize keyword list")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secureprompt_core::PromptChecker;

    #[test]
    fn test_keywords_report() {
        let checker = PromptChecker::with_keywords(&["Password", "pin"]);
        let mut out = Vec::new();
        run_keywords(&checker, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"keywords\":[\"password\",\"pin\"],\"count\":2}\n"
        );
    }
}

// secureprompt/src/ui/output_format.rs
//! Human-facing status messages written to stderr.
//!
//! Machine-readable output always goes to stdout uncolored; these helpers only
//! decorate the side channel, and only when it is a terminal.

use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::io::{self, Write};

use secureprompt_core::{CheckResult, Status};

/// Prints a one-line verdict for `result`.
pub fn print_check_summary<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    supports_color: bool,
) -> io::Result<()> {
    let verdict = result.status.to_string();
    let verdict = match (result.status, supports_color) {
        (_, false) => verdict,
        (Status::Safe, true) => verdict.green().bold().to_string(),
        (Status::Sensitive, true) => verdict.red().bold().to_string(),
    };

    if result.matches.is_empty() {
        writeln!(writer, "{}: no sensitive keywords found.", verdict)
    } else {
        let mut seen = HashSet::new();
        let keywords: Vec<&str> = result
            .matches
            .iter()
            .map(|m| m.keyword.as_str())
            .filter(|keyword| seen.insert(*keyword))
            .collect();
        writeln!(
            writer,
            "{}: {} match(es) [{}]",
            verdict,
            result.matches.len(),
            keywords.join(", ")
        )
    }
}

/// Prints an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.cyan())
    } else {
        writeln!(writer, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secureprompt_core::KeywordMatch;

    #[test]
    fn test_plain_summary_for_sensitive_prompt() {
        let result = CheckResult::sensitive(vec![
            KeywordMatch::new("pin", 4),
            KeywordMatch::new("pin", 16),
            KeywordMatch::new("token", 30),
        ]);
        let mut out = Vec::new();
        print_check_summary(&mut out, &result, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "SENSITIVE: 3 match(es) [pin, token]\n");
    }

    #[test]
    fn test_summary_lists_each_keyword_once_in_first_seen_order() {
        let result = CheckResult::sensitive(vec![
            KeywordMatch::new("pin", 0),
            KeywordMatch::new("token", 10),
            KeywordMatch::new("pin", 20),
            KeywordMatch::new("secret", 30),
            KeywordMatch::new("token", 40),
        ]);
        let mut out = Vec::new();
        print_check_summary(&mut out, &result, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "SENSITIVE: 5 match(es) [pin, token, secret]\n");
    }

    #[test]
    fn test_plain_summary_for_safe_prompt() {
        let result = CheckResult::safe("hello");
        let mut out = Vec::new();
        print_check_summary(&mut out, &result, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "SAFE: no sensitive keywords found.\n");
    }
}

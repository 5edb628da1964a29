//! Redaction of automaton matches.
//!
//! Matches carry character offsets; they are translated to byte spans of the
//! original text before being handed to [`apply_spans`].
//!
//! License: MIT OR APACHE 2.0

use std::iter;

use crate::matcher::fold_str;
use crate::redaction_match::{default_label, log_skipped_match_debug, KeywordMatch, RedactionSpan};
use crate::sanitizers::spans::apply_spans;

/// Replaces every matched span with the keyword's default label.
///
/// Text outside the matched spans is returned byte-for-byte, casing
/// included. With no matches the input is returned unchanged.
///
/// ```rust
/// use secureprompt_core::{redact, KeywordMatch};
///
/// let out = redact("My password: 123", &[KeywordMatch::new("password", 3)]);
/// assert_eq!(out, "My [PASSWORD]: 123");
/// ```
pub fn redact(text: &str, matches: &[KeywordMatch]) -> String {
    redact_with(text, matches, default_label)
}

/// Like [`redact`], with the label for each keyword chosen by `label_for`.
pub fn redact_with<F>(text: &str, matches: &[KeywordMatch], label_for: F) -> String
where
    F: Fn(&str) -> String,
{
    apply_spans(text, keyword_spans(text, matches, label_for))
}

/// Converts matches to byte spans of `text`.
///
/// A match is dropped when it reaches past the end of `text` or when the text
/// at its position is not the keyword (compared case-insensitively), so a
/// stale or foreign match list can never rewrite unrelated text.
pub fn keyword_spans<F>(text: &str, matches: &[KeywordMatch], label_for: F) -> Vec<RedactionSpan>
where
    F: Fn(&str) -> String,
{
    if matches.is_empty() {
        return Vec::new();
    }

    // Byte offset of every character, plus the end of the text.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(iter::once(text.len()))
        .collect();

    let mut spans = Vec::with_capacity(matches.len());
    for m in matches {
        let len = m.char_len();
        if len == 0 {
            log_skipped_match_debug(module_path!(), "empty keyword", m);
            continue;
        }
        let (start, end) = match m.position.checked_add(len) {
            Some(end_char) if end_char < offsets.len() => (offsets[m.position], offsets[end_char]),
            _ => {
                log_skipped_match_debug(module_path!(), "span exceeds input", m);
                continue;
            }
        };
        if fold_str(&text[start..end]) != fold_str(&m.keyword) {
            log_skipped_match_debug(module_path!(), "text does not match keyword", m);
            continue;
        }
        spans.push(RedactionSpan::new(start, end, label_for(&m.keyword)));
    }
    spans
}

//! Reverse-order application of redaction spans.
//!
//! License: MIT OR APACHE 2.0

use log::warn;

use crate::redaction_match::{log_redaction_action_debug, RedactionSpan};

/// Merges overlapping spans.
///
/// Spans are ordered by start, longest first on a shared start; the sort is
/// stable so earlier input wins a full tie. A span that starts inside the
/// previous one extends it and the previous label is kept. Adjacent spans
/// stay separate. Empty spans are dropped.
pub fn coalesce(mut spans: Vec<RedactionSpan>) -> Vec<RedactionSpan> {
    spans.retain(|span| !span.is_empty());
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut merged: Vec<RedactionSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start < last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Replaces every span of `text` with its label.
///
/// Spans that do not lie on character boundaries inside `text` are ignored.
/// The remaining spans are coalesced and applied in descending start order,
/// so each edit only touches bytes to the right of every span still pending.
pub fn apply_spans(text: &str, spans: Vec<RedactionSpan>) -> String {
    let valid: Vec<RedactionSpan> = spans
        .into_iter()
        .filter(|span| {
            let ok = span.start <= span.end
                && span.end <= text.len()
                && text.is_char_boundary(span.start)
                && text.is_char_boundary(span.end);
            if !ok {
                warn!(
                    "Ignoring redaction span {}..{} outside the input ({} bytes).",
                    span.start,
                    span.end,
                    text.len()
                );
            }
            ok
        })
        .collect();

    let mut result = text.to_string();
    for span in coalesce(valid).into_iter().rev() {
        log_redaction_action_debug(module_path!(), &text[span.start..span.end], &span.label);
        result.replace_range(span.start..span.end, &span.label);
    }
    result
}

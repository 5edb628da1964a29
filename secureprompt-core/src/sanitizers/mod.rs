//! Redaction passes for SecurePrompt.
//!
//! Both passes reduce their matches to byte-range [`RedactionSpan`]s over the
//! original text and hand them to [`spans::apply_spans`], which rewrites the
//! text from the rightmost span to the leftmost. Because a replacement label
//! rarely has the length of the text it replaces, rewriting left to right
//! would shift every offset still waiting to be applied.
//!
//! * `keyword`: turns automaton matches (character offsets) into spans.
//! * `pattern`: regex rules for structural data such as mail addresses,
//!   phone numbers and long identification numbers.
//! * `spans`: coalescing and reverse-order application.
//!
//! [`RedactionSpan`]: crate::redaction_match::RedactionSpan

pub mod keyword;
pub mod pattern;
pub mod spans;

// secureprompt-core/src/matcher/mod.rs
//! Multi-keyword matching for SecurePrompt.
//!
//! The matcher is a hand-built Aho-Corasick automaton: a trie of every keyword,
//! failure links computed breadth-first, and output lists closed over the
//! failure chain. It is compiled once from the keyword dictionary and then
//! only read, so a single instance can serve any number of concurrent scans.
//!
//! * `automaton`: the state arena and the builder.
//! * `scanner`: the single-pass scan, the lazy match iterator and `quick_contains`.
//!
//! Matching is case-insensitive. Folding is done one character at a time and
//! never changes the number of characters, so positions reported against the
//! folded text are valid character offsets into the original text.
//!
//! License: MIT OR APACHE 2.0

pub mod automaton;
pub mod scanner;

pub use automaton::{Automaton, StateId, ROOT};
pub use scanner::FindIter;

/// Lower-cases a single character.
///
/// Characters whose lowercase form expands to several characters (for
/// example `'İ'`) are kept as they are, so folding is length-preserving.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Folds a whole string with [`fold_char`].
pub fn fold_str(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_ascii() {
        assert_eq!(fold_str("PassWORD"), "password");
    }

    #[test]
    fn test_fold_preserves_char_count() {
        let input = "İstanbul ÉCOLE straße";
        assert_eq!(fold_str(input).chars().count(), input.chars().count());
        assert_eq!(fold_char('É'), 'é');
        assert_eq!(fold_char('İ'), 'İ');
    }
}

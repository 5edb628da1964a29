// secureprompt-core/src/matcher/scanner.rs
//! Runs text through a compiled [`Automaton`].
//!
//! The scan walks the folded characters once, following failure links when
//! there is no direct transition. Every pattern in the output list of the
//! state reached after a character is reported, which includes overlapping
//! and nested occurrences.
//!
//! License: MIT OR APACHE 2.0

use std::iter::Enumerate;
use std::str::Chars;

use super::automaton::{Automaton, StateId, ROOT};
use super::fold_char;
use crate::redaction_match::KeywordMatch;

/// Lazy iterator over every keyword occurrence in a text.
///
/// Matches come out in discovery order: by end position, and for a shared
/// end position from the longest pattern to the shortest.
#[derive(Debug, Clone)]
pub struct FindIter<'a, 't> {
    automaton: &'a Automaton,
    chars: Enumerate<Chars<'t>>,
    state: StateId,
    /// Character index of the last consumed character.
    index: usize,
    /// Next output slot of `state` to report.
    pending: usize,
}

impl<'a, 't> Iterator for FindIter<'a, 't> {
    type Item = KeywordMatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let output = &self.automaton.states[self.state].output;
            if let Some(&pattern_id) = output.get(self.pending) {
                self.pending += 1;
                let len = self.automaton.pattern_lens[pattern_id];
                return Some(KeywordMatch {
                    keyword: self.automaton.patterns[pattern_id].clone(),
                    position: self.index + 1 - len,
                });
            }

            let (index, c) = self.chars.next()?;
            self.state = self.automaton.next_state(self.state, fold_char(c));
            self.index = index;
            self.pending = 0;
        }
    }
}

impl Automaton {
    /// Returns a lazy iterator over every match in `text`.
    pub fn find_iter<'a, 't>(&'a self, text: &'t str) -> FindIter<'a, 't> {
        FindIter {
            automaton: self,
            chars: text.chars().enumerate(),
            state: ROOT,
            index: 0,
            pending: 0,
        }
    }

    /// Scans `text` and collects every `(keyword, position)` occurrence.
    ///
    /// Positions are character offsets into `text` as given (case preserved).
    pub fn scan(&self, text: &str) -> Vec<KeywordMatch> {
        self.find_iter(text).collect()
    }

    /// Returns `true` as soon as any keyword completes, without collecting
    /// positions.
    pub fn quick_contains(&self, text: &str) -> bool {
        let mut state = ROOT;
        for c in text.chars() {
            state = self.next_state(state, fold_char(c));
            if !self.states[state].output.is_empty() {
                return true;
            }
        }
        false
    }
}

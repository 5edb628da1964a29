// secureprompt-core/src/matcher/automaton.rs
//! Compiles a keyword dictionary into an Aho-Corasick automaton.
//!
//! States live in a flat arena (`Vec<State>`) and refer to each other by
//! index. Goto edges are owned by their source state; failure links are plain
//! indices used only for traversal.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{BTreeMap, HashSet, VecDeque};

use log::{debug, warn};

use super::fold_str;

/// Index of a state inside the automaton's arena.
pub type StateId = usize;

/// The start state. Its failure link points to itself.
pub const ROOT: StateId = 0;

#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    /// Goto function: folded input character to child state.
    pub(crate) goto: BTreeMap<char, StateId>,
    /// Failure link.
    pub(crate) fail: StateId,
    /// Ids of every pattern completing at this state, own pattern first,
    /// followed by those inherited through the failure chain.
    pub(crate) output: Vec<usize>,
}

/// An immutable multi-pattern matcher built from a fixed set of keywords.
///
/// Build it once with [`Automaton::build`] and share it (by reference or
/// `Arc`) between as many scanning threads as needed; no method takes
/// `&mut self` after construction.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub(crate) states: Vec<State>,
    /// Deduplicated, case-folded patterns in first-seen order.
    pub(crate) patterns: Vec<String>,
    /// Length of each pattern in characters.
    pub(crate) pattern_lens: Vec<usize>,
}

impl Automaton {
    /// Builds the automaton from `patterns`.
    ///
    /// Patterns are case-folded before insertion. Duplicates collapse into a
    /// single entry and empty patterns are skipped, so construction never
    /// fails. An empty dictionary produces an automaton that matches nothing.
    pub fn build<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut automaton = Self {
            states: vec![State::default()],
            patterns: Vec::with_capacity(patterns.len()),
            pattern_lens: Vec::with_capacity(patterns.len()),
        };

        let mut seen: HashSet<String> = HashSet::with_capacity(patterns.len());
        for (index, raw) in patterns.iter().enumerate() {
            let folded = fold_str(raw.as_ref());
            if folded.is_empty() {
                warn!("Skipping empty pattern at index {}.", index);
                continue;
            }
            if !seen.insert(folded.clone()) {
                debug!("Pattern '{}' is a duplicate, collapsing.", folded);
                continue;
            }
            automaton.insert(folded);
        }

        automaton.build_failure_links();

        debug!(
            "Built automaton: {} patterns, {} states.",
            automaton.patterns.len(),
            automaton.states.len()
        );
        automaton
    }

    /// Trie insertion. Marks the terminal state with the new pattern id.
    fn insert(&mut self, pattern: String) {
        let id = self.patterns.len();
        let mut current = ROOT;

        for c in pattern.chars() {
            current = match self.states[current].goto.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.states.len();
                    self.states.push(State::default());
                    self.states[current].goto.insert(c, next);
                    next
                }
            };
        }

        self.states[current].output.push(id);
        self.pattern_lens.push(pattern.chars().count());
        self.patterns.push(pattern);
    }

    /// Breadth-first failure link construction with output propagation.
    ///
    /// Every ancestor of a state, and every state its failure chain can
    /// reach, is shallower and therefore finalized before the state itself.
    fn build_failure_links(&mut self) {
        let mut queue: VecDeque<StateId> = VecDeque::new();

        let depth_one: Vec<StateId> = self.states[ROOT].goto.values().copied().collect();
        for child in depth_one {
            self.states[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(char, StateId)> = self.states[current]
                .goto
                .iter()
                .map(|(&c, &child)| (c, child))
                .collect();

            for (c, child) in edges {
                queue.push_back(child);

                let mut fallback = self.states[current].fail;
                while fallback != ROOT && !self.states[fallback].goto.contains_key(&c) {
                    fallback = self.states[fallback].fail;
                }
                let target = self.states[fallback].goto.get(&c).copied().unwrap_or(ROOT);
                self.states[child].fail = target;

                let inherited = self.states[target].output.clone();
                self.states[child].output.extend(inherited);
            }
        }
    }

    /// One step of the automaton on an already folded character.
    #[inline]
    pub(crate) fn next_state(&self, mut state: StateId, c: char) -> StateId {
        loop {
            if let Some(&next) = self.states[state].goto.get(&c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state].fail;
        }
    }

    /// The deduplicated, lower-cased dictionary in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of states in the arena, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

// secureprompt-core/tests/scanner_oracle_tests.rs
//! Compares the automaton against a brute-force scan over many random
//! dictionaries and texts, and checks the documented match ordering.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use secureprompt_core::matcher::fold_str;
use secureprompt_core::{redact_with, Automaton, KeywordMatch};

/// Checks every pattern at every character position.
fn brute_force(patterns: &[String], text: &str) -> BTreeSet<(String, usize)> {
    let folded: Vec<char> = fold_str(text).chars().collect();
    let mut found = BTreeSet::new();
    for pattern in patterns {
        let needle: Vec<char> = fold_str(pattern).chars().collect();
        if needle.is_empty() || needle.len() > folded.len() {
            continue;
        }
        for start in 0..=folded.len() - needle.len() {
            if folded[start..start + needle.len()] == needle[..] {
                found.insert((fold_str(pattern), start));
            }
        }
    }
    found
}

fn as_set(matches: &[KeywordMatch]) -> BTreeSet<(String, usize)> {
    matches.iter().map(|m| (m.keyword.clone(), m.position)).collect()
}

fn random_string(rng: &mut StdRng, alphabet: &[char], min: usize, max: usize) -> String {
    let len = rng.random_range(min..=max);
    (0..len).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect()
}

#[test_log::test]
fn scan_matches_brute_force_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5ec0_2e);
    let pattern_alphabet = ['a', 'b', 'A', 'c'];
    let text_alphabet = ['a', 'b', 'B', 'A', 'c', ' ', 'é'];

    for _ in 0..300 {
        let pattern_count = rng.random_range(1..=8);
        let patterns: Vec<String> = (0..pattern_count)
            .map(|_| random_string(&mut rng, &pattern_alphabet, 1, 5))
            .collect();
        let text = random_string(&mut rng, &text_alphabet, 0, 60);

        let automaton = Automaton::build(&patterns);
        let matches = automaton.scan(&text);

        assert_eq!(
            as_set(&matches),
            brute_force(&patterns, &text),
            "patterns={:?} text={:?}",
            patterns,
            text
        );
        // every occurrence is reported exactly once
        assert_eq!(matches.len(), as_set(&matches).len());
    }
}

#[test]
fn scan_is_case_insensitive_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet = ['h', 'e', 's', 'i', 'r', ' '];

    for _ in 0..200 {
        let patterns: Vec<String> = (0..4).map(|_| random_string(&mut rng, &alphabet, 1, 4)).collect();
        let text = random_string(&mut rng, &alphabet, 0, 40);
        let automaton = Automaton::build(&patterns);

        assert_eq!(automaton.scan(&text), automaton.scan(&text.to_uppercase()));
    }
}

#[test]
fn matches_come_out_in_discovery_order() {
    let automaton = Automaton::build(&["a", "aa", "aaa", "ba", "b"]);
    let matches = automaton.scan("baaab");

    let mut last: Option<(usize, usize)> = None;
    for m in &matches {
        let len = m.keyword.chars().count();
        let end = m.position + len;
        if let Some((last_end, last_len)) = last {
            assert!(end > last_end || (end == last_end && len < last_len), "{:?}", matches);
        }
        last = Some((end, len));
    }
    assert_eq!(
        matches,
        vec![
            KeywordMatch::new("b", 0),
            KeywordMatch::new("ba", 0),
            KeywordMatch::new("a", 1),
            KeywordMatch::new("aa", 1),
            KeywordMatch::new("a", 2),
            KeywordMatch::new("aaa", 1),
            KeywordMatch::new("aa", 2),
            KeywordMatch::new("a", 3),
            KeywordMatch::new("b", 4),
        ]
    );
}

#[test]
fn concrete_scenarios() {
    let automaton = Automaton::build(&["password"]);
    assert_eq!(automaton.scan("Enter your password here"), vec![KeywordMatch::new("password", 11)]);

    let automaton = Automaton::build(&["he", "she", "his", "hers"]);
    let matches = automaton.scan("she is his");
    assert!(matches.contains(&KeywordMatch::new("she", 0)));
    assert!(matches.contains(&KeywordMatch::new("he", 1)));
    assert!(matches.contains(&KeywordMatch::new("his", 7)));

    let automaton = Automaton::build(&["email", "phone"]);
    assert_eq!(
        automaton.scan("Send email to my phone"),
        vec![KeywordMatch::new("email", 5), KeywordMatch::new("phone", 17)]
    );
}

#[test]
fn quick_contains_agrees_with_scan() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet = ['x', 'y', 'z'];
    for _ in 0..200 {
        let patterns: Vec<String> = (0..3).map(|_| random_string(&mut rng, &alphabet, 2, 4)).collect();
        let text = random_string(&mut rng, &alphabet, 0, 12);
        let automaton = Automaton::build(&patterns);
        assert_eq!(automaton.quick_contains(&text), !automaton.scan(&text).is_empty());
    }
}

#[test_log::test]
fn redact_preserves_text_outside_matches_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0xdead_5eed);
    let pattern_alphabet = ['a', 'b', 'c', 'é'];
    let text_alphabet = ['a', 'b', 'c', 'A', 'B', 'é', 'É', ' ', '.'];

    for _ in 0..300 {
        let pattern_count = rng.random_range(1..=5);
        let patterns: Vec<String> = (0..pattern_count)
            .map(|_| random_string(&mut rng, &pattern_alphabet, 1, 4))
            .collect();
        let text = random_string(&mut rng, &text_alphabet, 0, 50);

        let automaton = Automaton::build(&patterns);
        let matches = automaton.scan(&text);
        // '#' never occurs in the text, so it marks exactly the replaced spans
        let redacted = redact_with(&text, &matches, |_| "#".to_string());

        let chars: Vec<char> = text.chars().collect();
        let mut covered = vec![false; chars.len()];
        for m in &matches {
            for flag in &mut covered[m.position..m.position + m.keyword.chars().count()] {
                *flag = true;
            }
        }
        let outside: String = chars
            .iter()
            .zip(&covered)
            .filter(|(_, is_covered)| !**is_covered)
            .map(|(&c, _)| c)
            .collect();

        assert_eq!(
            redacted.replace('#', ""),
            outside,
            "patterns={:?} text={:?}",
            patterns,
            text
        );
        let labels = redacted.matches('#').count();
        assert!(labels <= matches.len());
        assert_eq!(labels == 0, matches.is_empty(), "text={:?} redacted={:?}", text, redacted);
    }
}

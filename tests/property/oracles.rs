//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations: `strsim` for whole-string
//! Levenshtein, and brute force over every substring for approximate
//! substring matching and for the field distance itself. The optimized
//! kernels must agree with them.

use proptest::prelude::*;
use rigveda_search::fuzzy::{best_alignment, edit_distance, edit_distance_chars};
use rigveda_search::{distance_with, normalize, SearchConfig};

/// Cheapest alignment of `pattern` against any substring of `text`, trying
/// every `(start, end)` pair. O(n² · nm) but trivially correct.
fn oracle_best_substring(pattern: &[char], text: &[char]) -> usize {
    let mut best = pattern.len();
    for start in 0..=text.len() {
        for end in start..=text.len() {
            best = best.min(edit_distance_chars(pattern, &text[start..end]));
        }
    }
    best
}

/// Field distance by definition: the smallest `errors / m + start / distance`
/// over every substring, or 1.0 when that is over the threshold.
fn oracle_field_distance(query: &str, text: &str, config: &SearchConfig) -> f64 {
    let q = chars(&normalize(query));
    let t = chars(&normalize(text));
    let m = q.len() as f64;
    let mut best = 1.0_f64;
    for start in 0..=t.len() {
        for end in start..=t.len() {
            let errors = edit_distance_chars(&q, &t[start..end]) as f64;
            let score = errors / m + start as f64 / config.distance as f64;
            best = best.min(score);
        }
    }
    if best < 1.0 && best <= config.threshold + 1e-9 {
        best
    } else {
        1.0
    }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

proptest! {
    #[test]
    fn prop_edit_distance_matches_strsim(a in "[a-dāṛ ]{0,12}", b in "[a-dāṛ ]{0,12}") {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_field_distance_is_cheapest_substring(
        query in "[ab]{12,20}",
        text in "[abc]{0,36}",
        distance in 1usize..80,
    ) {
        let config = SearchConfig::default().with_distance(distance);
        let expected = oracle_field_distance(&query, &text, &config);
        let actual = distance_with(&query, &text, &config);
        prop_assert!(
            (actual - expected).abs() < 1e-9,
            "{:?} in {:?} at distance {}: got {}, cheapest substring scores {}",
            query, text, distance, actual, expected
        );
    }

    #[test]
    fn prop_alignment_matches_brute_force(
        pattern in "[a-c]{1,5}",
        text in "[a-c ]{0,14}",
        max in 0usize..4,
    ) {
        let p = chars(&pattern);
        let t = chars(&text);
        let oracle = oracle_best_substring(&p, &t);
        let found = best_alignment(&p, &t, max);

        if oracle <= max && !t.is_empty() {
            let found = found.expect("oracle found an alignment within budget");
            prop_assert_eq!(found.errors, oracle);
            // The reported span really is that cheap
            prop_assert_eq!(
                edit_distance_chars(&p, &t[found.start..found.end]),
                found.errors
            );
        } else if oracle > max {
            prop_assert!(found.is_none());
        }
    }

    #[test]
    fn prop_exact_substring_is_free(prefix in "[a-z ]{0,10}", word in "[a-z]{1,6}", suffix in "[a-z ]{0,10}") {
        let text = format!("{}{}{}", prefix, word, suffix);
        let found = best_alignment(&chars(&word), &chars(&text), 0).unwrap();
        prop_assert_eq!(found.errors, 0);
        prop_assert!(found.start <= prefix.chars().count());
    }
}

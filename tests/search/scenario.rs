//! The two-hymn walkthrough: Agni and Indra, both by Vishvamitra.

use super::common::{engine, keys, scenario_corpus};
use rigveda_search::SearchField;

#[test]
fn test_deity_query_finds_one_hymn() {
    let engine = engine(&scenario_corpus());
    let results = engine.search("Agni");

    assert_eq!(keys(&results), vec!["1.1"]);
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[0].record.deity, "Agni");
}

#[test]
fn test_shared_seer_returns_both_in_corpus_order() {
    let engine = engine(&scenario_corpus());
    let results = engine.search("Vishvamitra");

    assert_eq!(keys(&results), vec!["1.1", "1.2"]);
    for result in &results {
        assert_eq!(result.score, 0.0);
        assert_eq!(result.best_match().unwrap().field, SearchField::Rsi);
    }
}

#[test]
fn test_verse_word_scores_above_zero() {
    let engine = engine(&scenario_corpus());
    let results = engine.search("fire");

    assert_eq!(keys(&results), vec!["1.1"]);
    let score = results[0].score;
    assert!(score > 0.0, "lead-in should cost something, got {}", score);
    assert!(score <= 0.4, "should stay within threshold, got {}", score);
}

#[test]
fn test_nonsense_matches_nothing() {
    let engine = engine(&scenario_corpus());
    assert!(engine.search("xyzzy").is_empty());
}

#[test]
fn test_case_does_not_matter() {
    let engine = engine(&scenario_corpus());
    assert_eq!(keys(&engine.search("AGNI")), keys(&engine.search("agni")));
    assert_eq!(keys(&engine.search("InDrA")), vec!["1.2"]);
}

#[test]
fn test_meter_query() {
    let engine = engine(&scenario_corpus());
    let results = engine.search("Trishtubh");
    assert_eq!(keys(&results)[0], "1.2");
    assert_eq!(results[0].best_match().unwrap().field, SearchField::Meter);
}

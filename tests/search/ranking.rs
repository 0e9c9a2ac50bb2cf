//! Ranking order: score, then best-field weight, then corpus order.

use super::common::{
    assert_well_ranked, engine, engine_with, keys, make_mandala, make_sukta, make_verse,
    sample_corpus,
};
use rigveda_search::{Corpus, SearchConfig, SearchField};

/// Two hymns where the same word is a deity in one and verse text in the other.
fn tag_versus_body() -> Corpus {
    Corpus {
        mandalas: vec![make_mandala(
            1,
            vec![
                make_sukta(1, "Surya", "Kanva", "Gayatri", vec![make_verse(1, "soma")]),
                make_sukta(2, "Soma", "Kanva", "Gayatri", vec![make_verse(1, "dawn")]),
            ],
        )],
    }
}

#[test]
fn test_tag_beats_body_at_equal_score() {
    let engine = engine(&tag_versus_body());
    let results = engine.search("soma");

    // Both score 0; the deity weight outranks the translation weight
    assert_eq!(keys(&results), vec!["1.2", "1.1"]);
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[1].score, 0.0);
    assert_eq!(results[0].best_match().unwrap().field, SearchField::Deity);
    assert_eq!(results[1].best_match().unwrap().field, SearchField::Translation);
}

#[test]
fn test_custom_weights_reorder_ties() {
    let config = SearchConfig::default()
        .with_weight(SearchField::Deity, 0.05)
        .with_weight(SearchField::Translation, 0.9);
    let engine = engine_with(&tag_versus_body(), config);

    assert_eq!(keys(&engine.search("soma")), vec!["1.1", "1.2"]);
}

#[test]
fn test_better_score_wins_regardless_of_weight() {
    let corpus = Corpus {
        mandalas: vec![make_mandala(
            1,
            vec![
                // Typo in the heavy field
                make_sukta(1, "Indro", "Kanva", "Gayatri", vec![make_verse(1, "dawn")]),
                // Exact in the light field
                make_sukta(2, "Ushas", "Kanva", "Gayatri", vec![make_verse(1, "indra")]),
            ],
        )],
    };
    let engine = engine(&corpus);
    let results = engine.search("indra");

    assert_eq!(keys(&results), vec!["1.2", "1.1"]);
    assert!(results[0].score < results[1].score);
}

#[test]
fn test_every_matching_field_is_listed_best_first() {
    let engine = engine(&sample_corpus());
    let results = engine.search("agni");
    let first = &results[0];

    assert_eq!(first.key().to_string(), "1.1");
    assert!(first.matches.len() >= 2);
    assert!(first
        .matches
        .windows(2)
        .all(|pair| pair[0].score <= pair[1].score));
}

#[test]
fn test_sample_queries_are_well_ranked() {
    let engine = engine(&sample_corpus());
    for query in ["agni", "indra", "gayatri", "soma", "vayu", "priest", "trishtubh"] {
        assert_well_ranked(&engine.search(query), 0.4);
    }
}

#[test]
fn test_limit_keeps_the_best() {
    let engine = engine(&sample_corpus());
    let all = engine.search("gayatri");
    let top = engine.search_limit("gayatri", 2);

    assert_eq!(all.len(), 3);
    assert_eq!(keys(&top), keys(&all[..2]));
}

//! Engine lifecycle: initialize, browse, re-initialize, failure.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::common::{engine, keys, sample_corpus, scenario_corpus};
use rigveda_search::{Corpus, Mandala, MalformedCorpus, SearchConfig, SearchEngine};

#[test]
fn test_all_records_in_corpus_order() {
    let engine = engine(&sample_corpus());
    let records: Vec<String> = engine
        .all_records()
        .iter()
        .map(|r| r.key().to_string())
        .collect();
    assert_eq!(records, vec!["1.1", "1.2", "1.3", "2.12", "10.129"]);
}

#[test]
fn test_records_in_group() {
    let engine = engine(&sample_corpus());
    assert_eq!(engine.records_in_group(1).len(), 3);
    assert_eq!(engine.records_in_group(10)[0].sukta_number, 129);
    assert!(engine.records_in_group(5).is_empty());
    assert!(engine.records_in_group(0).is_empty());
}

#[test]
fn test_reinitialize_swaps_corpus() {
    let engine = engine(&scenario_corpus());
    assert_eq!(keys(&engine.search("vishvamitra")), vec!["1.1", "1.2"]);

    engine.initialize(&sample_corpus()).unwrap();
    assert_eq!(engine.len(), 5);
    assert_eq!(keys(&engine.search("Gritsamada")), vec!["2.12"]);
}

#[test]
fn test_failed_initialize_changes_nothing() {
    let engine = engine(&scenario_corpus());
    let broken = Corpus {
        mandalas: vec![Mandala {
            mandala: 2,
            suktas: None,
        }],
    };

    assert_eq!(
        engine.initialize(&broken),
        Err(MalformedCorpus::MissingSuktas {
            mandala: 2,
            position: 0
        })
    );
    assert_eq!(engine.len(), 2);
    assert_eq!(keys(&engine.search("agni")), vec!["1.1"]);
}

#[test]
fn test_failed_first_initialize_leaves_engine_empty() {
    let engine = SearchEngine::new();
    let broken = Corpus {
        mandalas: vec![Mandala {
            mandala: 2,
            suktas: None,
        }],
    };
    assert!(engine.initialize(&broken).is_err());
    assert!(!engine.is_initialized());
}

#[test]
fn test_random_record_is_seeded() {
    let engine = engine(&sample_corpus());
    let picks: Vec<String> = (0..5)
        .map(|_| {
            let mut rng = StdRng::seed_from_u64(7);
            engine.random_record(&mut rng).unwrap().key().to_string()
        })
        .collect();
    assert!(picks.windows(2).all(|w| w[0] == w[1]));

    let mut rng = StdRng::seed_from_u64(7);
    let spread: std::collections::HashSet<String> = (0..200)
        .filter_map(|_| engine.random_record(&mut rng))
        .map(|r| r.key().to_string())
        .collect();
    assert_eq!(spread.len(), 5);
}

#[test]
fn test_invalid_config_is_rejected() {
    let zero_weight = SearchConfig::default().with_weight(rigveda_search::SearchField::Meter, 0.0);
    assert!(SearchEngine::with_config(zero_weight).is_err());
    assert!(SearchEngine::with_config(SearchConfig::default().with_threshold(-0.1)).is_err());
}

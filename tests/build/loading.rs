//! Reading corpus files, including the bundled sample and fallback behavior.

use super::common::{write_corpus, SAMPLE_DATA};
use rigveda_search::{load_corpus, load_corpus_with_fallback, LoadError, SearchEngine};

#[test]
fn test_bundled_sample_loads_and_indexes() {
    let corpus = load_corpus(SAMPLE_DATA).unwrap();
    assert_eq!(corpus.mandala_count(), 4);
    assert_eq!(corpus.total_sukta_count(), 6);
    assert_eq!(corpus.sukta_count(1), 3);

    let engine = SearchEngine::new();
    engine.initialize(&corpus).unwrap();
    assert_eq!(engine.len(), 6);

    let results = engine.search("Savitr");
    assert_eq!(results[0].key().to_string(), "3.62");
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_sample_finds_verse_text() {
    let engine = SearchEngine::new();
    engine.initialize(&load_corpus(SAMPLE_DATA).unwrap()).unwrap();

    let results = engine.search("tat savitur varenyam");
    assert_eq!(results[0].key().to_string(), "3.62");
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_missing_file() {
    let err = load_corpus("no/such/corpus.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_malformed_json() {
    let file = write_corpus("{ \"mandalas\": [ ");
    let err = load_corpus(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn test_fallback_when_primary_missing() {
    let corpus = load_corpus_with_fallback("no/such/corpus.json", SAMPLE_DATA).unwrap();
    assert_eq!(corpus.total_sukta_count(), 6);
}

#[test]
fn test_fallback_when_primary_empty() {
    let empty = write_corpus(r#"{"mandalas": [{"mandala": 1, "suktas": []}]}"#);
    let corpus = load_corpus_with_fallback(empty.path(), SAMPLE_DATA).unwrap();
    assert!(corpus.has_content());
}

#[test]
fn test_primary_preferred_when_usable() {
    let primary = write_corpus(
        r#"{"mandalas": [{"mandala": 9, "suktas": [
            {"suktaId": "9.1", "suktaNumber": 1, "rsi": "Madhuchchhandas",
             "deity": "Soma Pavamana", "meter": "Gayatri", "verses": []}
        ]}]}"#,
    );
    let corpus = load_corpus_with_fallback(primary.path(), SAMPLE_DATA).unwrap();
    assert_eq!(corpus.mandalas[0].mandala, 9);
}

#[test]
fn test_both_unavailable() {
    let err = load_corpus_with_fallback("no/such/a.json", "no/such/b.json").unwrap_err();
    assert!(matches!(err, LoadError::Unavailable { .. }));
    assert!(err.to_string().contains("no usable corpus"));
}

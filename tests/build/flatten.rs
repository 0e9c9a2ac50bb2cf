//! Flattening: one record per sukta, in traversal order, or a structural error.

use super::common::{make_mandala, make_sukta, make_verse, sample_corpus};
use rigveda_search::{flatten_corpus, Corpus, MalformedCorpus, Mandala, RecordKey, Sukta};

#[test]
fn test_one_record_per_sukta_in_order() {
    let corpus = sample_corpus();
    let records = flatten_corpus(&corpus).unwrap();

    assert_eq!(records.len(), corpus.total_sukta_count());
    let keys: Vec<(u32, u32)> = records.iter().map(|r| (r.mandala, r.sukta_number)).collect();
    assert_eq!(keys, vec![(1, 1), (1, 2), (1, 3), (2, 12), (10, 129)]);
}

#[test]
fn test_record_carries_sukta_fields() {
    let records = flatten_corpus(&sample_corpus()).unwrap();
    let first = &records[0];

    assert_eq!(first.sukta_id, "1.1");
    assert_eq!(first.deity, "Agni");
    assert_eq!(first.rsi, "Madhuchchhandas Vaishvamitra");
    assert_eq!(first.meter, "Gayatri");
    assert_eq!(first.verses.len(), 2);
    assert_eq!(first.verses[1].verse_number, 2);
}

#[test]
fn test_empty_arrays_are_fine() {
    let corpus = Corpus {
        mandalas: vec![
            Mandala {
                mandala: 1,
                suktas: Some(vec![]),
            },
            make_mandala(2, vec![make_sukta(1, "Agni", "Gritsamada", "Jagati", vec![])]),
        ],
    };
    let records = flatten_corpus(&corpus).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].verses.is_empty());
}

#[test]
fn test_empty_corpus_flattens_to_nothing() {
    assert!(flatten_corpus(&Corpus::default()).unwrap().is_empty());
}

#[test]
fn test_missing_suktas_reports_mandala() {
    let corpus = Corpus {
        mandalas: vec![
            make_mandala(1, vec![make_sukta(1, "Agni", "Kanva", "Gayatri", vec![])]),
            Mandala {
                mandala: 7,
                suktas: None,
            },
        ],
    };
    assert_eq!(
        flatten_corpus(&corpus),
        Err(MalformedCorpus::MissingSuktas {
            mandala: 7,
            position: 1
        })
    );
}

#[test]
fn test_missing_verses_reports_sukta() {
    let corpus = Corpus {
        mandalas: vec![make_mandala(
            3,
            vec![
                make_sukta(1, "Agni", "Vishvamitra", "Trishtubh", vec![make_verse(1, "x")]),
                Sukta {
                    verses: None,
                    ..make_sukta(2, "Indra", "Vishvamitra", "Trishtubh", vec![])
                },
            ],
        )],
    };
    let err = flatten_corpus(&corpus).unwrap_err();
    assert_eq!(
        err,
        MalformedCorpus::MissingVerses {
            mandala: 3,
            sukta: 2,
            position: 1
        }
    );
    assert!(err.to_string().contains("sukta 2 of mandala 3"));
}

#[test]
fn test_duplicate_key_is_rejected() {
    let corpus = Corpus {
        mandalas: vec![make_mandala(
            1,
            vec![
                make_sukta(5, "Indra", "Kanva", "Gayatri", vec![]),
                make_sukta(5, "Soma", "Kanva", "Gayatri", vec![]),
            ],
        )],
    };
    assert_eq!(
        flatten_corpus(&corpus),
        Err(MalformedCorpus::DuplicateKey {
            key: RecordKey {
                mandala: 1,
                sukta: 5
            }
        })
    );
}

#[test]
fn test_same_sukta_number_in_different_mandalas() {
    let corpus = Corpus {
        mandalas: vec![
            make_mandala(1, vec![make_sukta(1, "Agni", "Kanva", "Gayatri", vec![])]),
            make_mandala(2, vec![make_sukta(1, "Agni", "Gritsamada", "Jagati", vec![])]),
        ],
    };
    assert_eq!(flatten_corpus(&corpus).unwrap().len(), 2);
}

//! Advisory validation over whole corpora.

use super::common::{make_mandala, make_sukta, sample_corpus, SAMPLE_DATA};
use rigveda_search::{load_corpus, validate_corpus, Corpus, ValidationIssue};

#[test]
fn test_bundled_sample_is_clean() {
    let report = validate_corpus(&load_corpus(SAMPLE_DATA).unwrap());
    assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
    assert_eq!(report.mandalas, 4);
    assert_eq!(report.suktas, 6);
    assert_eq!(report.verses, 8);
}

#[test]
fn test_fixture_gaps_are_reported_not_fatal() {
    let report = validate_corpus(&sample_corpus());
    assert!(!report.is_valid());
    // Translation-only verses lack Devanagari and IAST
    assert!(report.issues.iter().any(|issue| matches!(
        issue,
        ValidationIssue::EmptyVerseText {
            mandala: 2,
            sukta: 12,
            ..
        }
    )));
}

#[test]
fn test_out_of_range_mandala() {
    let corpus = Corpus {
        mandalas: vec![make_mandala(
            0,
            vec![make_sukta(1, "Agni", "Kanva", "Gayatri", vec![])],
        )],
    };
    let report = validate_corpus(&corpus);
    assert_eq!(
        report.issues[0],
        ValidationIssue::MandalaOutOfRange { mandala: 0 }
    );
}

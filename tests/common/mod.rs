//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use rigveda_search::{Corpus, SearchConfig, SearchEngine, SearchResult};
use tempfile::NamedTempFile;

// Re-export canonical fixtures from rigveda_search::testing
#[allow(unused_imports)]
pub use rigveda_search::testing::{
    make_full_verse, make_mandala, make_sukta, make_verse, sample_corpus, scenario_corpus,
};

/// Sample corpus shipped with the repository.
pub const SAMPLE_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/rigveda.sample.json");

/// Build an initialized engine with the default configuration.
pub fn engine(corpus: &Corpus) -> SearchEngine {
    engine_with(corpus, SearchConfig::default())
}

/// Build an initialized engine with a custom configuration.
pub fn engine_with(corpus: &Corpus, config: SearchConfig) -> SearchEngine {
    let engine = SearchEngine::with_config(config).expect("config should be valid");
    engine.initialize(corpus).expect("corpus should flatten");
    engine
}

/// `"m.s"` keys of results, in ranked order.
pub fn keys(results: &[SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.key().to_string()).collect()
}

/// Write JSON to a temporary file that lives as long as the handle.
pub fn write_corpus(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write temp corpus");
    file
}

/// Assert that results satisfy every ranking invariant.
pub fn assert_well_ranked(results: &[SearchResult], threshold: f64) {
    for (i, result) in results.iter().enumerate() {
        assert!(
            !result.matches.is_empty(),
            "INVARIANT VIOLATED: result {} ({}) has no field matches",
            i,
            result.key()
        );
        assert_eq!(
            result.score, result.matches[0].score,
            "INVARIANT VIOLATED: result {} score is not its best field's score",
            i
        );
        for m in &result.matches {
            assert!(
                m.score <= threshold + 1e-9,
                "INVARIANT VIOLATED: {} matched {:?} at {} over threshold {}",
                result.key(),
                m.field,
                m.score,
                threshold
            );
        }
    }
    for (i, pair) in results.windows(2).enumerate() {
        assert!(
            pair[0].score <= pair[1].score,
            "INVARIANT VIOLATED: results not sorted by score at {}: {} > {}",
            i,
            pair[0].score,
            pair[1].score
        );
    }
}

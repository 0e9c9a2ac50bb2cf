//! Same corpus, same query, same answer: across calls, rebuilds and threads.

use std::sync::Arc;
use std::thread;

use super::common::{engine, sample_corpus};
use rigveda_search::{SearchEngine, SearchResult};

fn fingerprint(results: &[SearchResult]) -> Vec<(String, u64, usize)> {
    results
        .iter()
        .map(|r| (r.key().to_string(), r.score.to_bits(), r.original_index))
        .collect()
}

const QUERIES: &[&str] = &["agni", "indra", "gayatri", "soma", "priest", "vaishvamitra", "xyzzy"];

#[test]
fn test_repeated_searches_agree() {
    let engine = engine(&sample_corpus());
    for query in QUERIES {
        let first = fingerprint(&engine.search(query));
        for _ in 0..5 {
            assert_eq!(first, fingerprint(&engine.search(query)), "query {}", query);
        }
    }
}

#[test]
fn test_rebuilt_engine_agrees() {
    let a = engine(&sample_corpus());
    let b = engine(&sample_corpus());
    for query in QUERIES {
        assert_eq!(
            fingerprint(&a.search(query)),
            fingerprint(&b.search(query)),
            "query {}",
            query
        );
    }
}

#[test]
fn test_concurrent_searches_agree() {
    let engine = Arc::new(engine(&sample_corpus()));
    let expected: Vec<_> = QUERIES
        .iter()
        .map(|q| fingerprint(&engine.search(q)))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                QUERIES
                    .iter()
                    .map(|q| fingerprint(&engine.search(q)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_readers_see_whole_index_during_reinitialize() {
    let engine: Arc<SearchEngine> = Arc::new(engine(&sample_corpus()));
    let expected = fingerprint(&engine.search("agni"));

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for _ in 0..20 {
                engine.initialize(&sample_corpus()).unwrap();
            }
        })
    };
    for _ in 0..50 {
        assert_eq!(fingerprint(&engine.search("agni")), expected);
        assert_eq!(engine.len(), 5);
    }
    writer.join().unwrap();
}

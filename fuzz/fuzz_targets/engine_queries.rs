// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end search.
//!
//! Arbitrary hymns in, arbitrary queries out: the engine must never panic,
//! and every result must respect the ranking invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rigveda_search::testing::{make_mandala, make_sukta, make_verse};
use rigveda_search::{Corpus, SearchEngine};

#[derive(Debug, Arbitrary)]
struct Hymn {
    deity: String,
    rsi: String,
    meter: String,
    verses: Vec<String>,
}

#[derive(Debug, Arbitrary)]
struct EngineInput {
    hymns: Vec<Hymn>,
    queries: Vec<String>,
}

fn cap(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fuzz_target!(|input: EngineInput| {
    let suktas = input
        .hymns
        .iter()
        .take(16)
        .enumerate()
        .map(|(i, hymn)| {
            let verses = hymn
                .verses
                .iter()
                .take(4)
                .enumerate()
                .map(|(v, text)| make_verse(v as u32 + 1, &cap(text, 120)))
                .collect();
            make_sukta(
                i as u32 + 1,
                &cap(&hymn.deity, 30),
                &cap(&hymn.rsi, 30),
                &cap(&hymn.meter, 20),
                verses,
            )
        })
        .collect();
    let corpus = Corpus {
        mandalas: vec![make_mandala(1, suktas)],
    };

    let engine = SearchEngine::new();
    engine.initialize(&corpus).expect("generated corpus is well formed");

    for query in input.queries.iter().take(8) {
        let results = engine.search(&cap(query, 40));

        for result in &results {
            // INVARIANT 1: threshold respected
            assert!(result.score <= 0.4 + 1e-9, "score {} over threshold", result.score);
            // INVARIANT 2: score comes from the best field
            assert_eq!(Some(result.score), result.best_match().map(|m| m.score));
        }

        // INVARIANT 3: sorted by score
        for pair in results.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }
});

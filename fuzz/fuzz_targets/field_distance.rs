// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the per-field distance.
//!
//! Any pair of strings must produce a distance in [0, 1], and anything
//! short of a full miss must be within the threshold. A text always matches
//! itself at distance 0.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rigveda_search::{distance_with, normalize, SearchConfig};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    query: String,
    text: String,
    ignore_location: bool,
    ignore_diacritics: bool,
    /// Threshold in hundredths, folded into [0, 1]
    threshold: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(40).collect();
    let text: String = input.text.chars().take(200).collect();

    let config = SearchConfig::default()
        .with_ignore_location(input.ignore_location)
        .with_ignore_diacritics(input.ignore_diacritics)
        .with_threshold(f64::from(input.threshold % 101) / 100.0);

    let d = distance_with(&query, &text, &config);

    // INVARIANT 1: bounded
    assert!(
        (0.0..=1.0).contains(&d),
        "distance {} out of range for query={:?}, text={:?}",
        d, query, text
    );

    // INVARIANT 2: either a miss or within threshold
    assert!(
        d == 1.0 || d <= config.threshold + 1e-9,
        "distance {} above threshold {} for query={:?}, text={:?}",
        d, config.threshold, query, text
    );

    // INVARIANT 3: a non-blank query matches itself perfectly
    if !normalize(&query).is_empty() {
        assert_eq!(
            distance_with(&query, &query, &config),
            0.0,
            "query {:?} should match itself",
            query
        );
    }
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! The best single field decides a record's score. Weights don't blend scores
//! together; they break ties. When two matches are equally close, the one from
//! the heavier field (deity over meter over verse text, by default) wins.
//!
//! Sort order for results:
//! 1. **Score** - ascending, 0 first
//! 2. **Weight** of the best-matching field - descending
//! 3. **Original index** - ascending, so the corpus order settles the rest

use std::cmp::Ordering;

use crate::config::FieldWeights;
use crate::types::{FieldMatch, SearchResult};

/// Compare two field matches of the same record.
///
/// Score, then weight (heavier first), then field declaration order, then
/// verse index.
pub fn compare_field_matches(a: &FieldMatch, b: &FieldMatch, weights: &FieldWeights) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| weights.get(b.field).total_cmp(&weights.get(a.field)))
        .then_with(|| a.field.cmp(&b.field))
        .then_with(|| a.verse_index.cmp(&b.verse_index))
}

/// Weight of the field that decided a result, 0 if it somehow has no matches.
fn best_weight(result: &SearchResult, weights: &FieldWeights) -> f64 {
    result
        .best_match()
        .map_or(0.0, |m| weights.get(m.field))
}

/// Compare two results for ranking.
pub fn compare_results(a: &SearchResult, b: &SearchResult, weights: &FieldWeights) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| best_weight(b, weights).total_cmp(&best_weight(a, weights)))
        .then_with(|| a.original_index.cmp(&b.original_index))
}

/// Order a record's field matches best first.
pub fn rank_field_matches(matches: &mut [FieldMatch], weights: &FieldWeights) {
    matches.sort_by(|a, b| compare_field_matches(a, b, weights));
}

/// Order results best first. Stable.
pub fn rank_results(results: &mut [SearchResult], weights: &FieldWeights) {
    results.sort_by(|a, b| compare_results(a, b, weights));
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation over a built index.
//!
//! Every record is scored independently, so with the `parallel` feature the
//! records fan out over rayon. Output order never depends on scheduling:
//! candidates are collected in record order and then sorted by a total order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::contracts::{check_matches_within_threshold, check_results_ranked};
use crate::index::{IndexedField, SearchIndex};
use crate::scoring::ranking::{rank_field_matches, rank_results};
use crate::scoring::{exact_token_span, score_text, PreparedQuery, Scored};
use crate::types::{FieldMatch, SearchResult};

/// Rank every record matching `query`, best first.
///
/// Empty and whitespace-only queries match nothing. The full candidate list
/// is returned; truncating to a display window is up to the caller.
pub fn search(index: &SearchIndex, query: &str) -> Vec<SearchResult> {
    let config = index.config();
    let Some(query) = PreparedQuery::new(query, config) else {
        return Vec::new();
    };

    let mut results: Vec<SearchResult> = {
        #[cfg(feature = "parallel")]
        {
            (0..index.len())
                .into_par_iter()
                .filter_map(|position| score_record(index, position, &query))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..index.len())
                .filter_map(|position| score_record(index, position, &query))
                .collect()
        }
    };

    rank_results(&mut results, &config.weights);
    check_results_ranked(&results, &config.weights);
    results
}

/// Score one record; `None` if no field lands within the threshold.
fn score_record(index: &SearchIndex, position: usize, query: &PreparedQuery) -> Option<SearchResult> {
    let config = index.config();
    let mut matches: Vec<FieldMatch> = index
        .fields(position)
        .iter()
        .filter_map(|field| score_field(field, query, config))
        .collect();

    if matches.is_empty() {
        return None;
    }
    rank_field_matches(&mut matches, &config.weights);

    let result = SearchResult {
        record: Arc::clone(index.record(position)?),
        score: matches[0].score,
        original_index: position,
        matches,
    };
    check_matches_within_threshold(&result, config.threshold);
    Some(result)
}

/// Best match of the query within one field, across all of its texts.
///
/// Tag fields try the exact token rule first. For body fields each verse is
/// scored on its own and the best verse wins; the first verse wins ties.
fn score_field(field: &IndexedField, query: &PreparedQuery, config: &SearchConfig) -> Option<FieldMatch> {
    let is_tag = field.field.is_tag();
    let mut best: Option<FieldMatch> = None;

    for (verse, text) in field.texts.iter().enumerate() {
        let scored = if is_tag {
            exact_token_span(&query.tokens, &text.tokens)
                .map(|(start, end)| Scored {
                    score: 0.0,
                    start,
                    end,
                })
                .or_else(|| score_text(query, &text.chars, config))
        } else {
            score_text(query, &text.chars, config)
        };

        let Some(scored) = scored else {
            continue;
        };
        if best.map_or(true, |b| scored.score < b.score) {
            best = Some(FieldMatch {
                field: field.field,
                verse_index: (!is_tag).then_some(verse),
                score: scored.score,
                start: scored.start,
                end: scored.end,
            });
        }
        // Nothing beats a perfect match
        if scored.score == 0.0 {
            break;
        }
    }

    best
}

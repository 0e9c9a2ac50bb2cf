// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a field's distance score.
//!
//! ```text
//! score = errors / query_len + start / distance      (clamped to 1.0)
//! ```
//!
//! `errors` is the edit distance of the best approximate occurrence of the
//! query in the field, `start` is where that occurrence begins. A match at the
//! very front of a field with no typos scores 0; every typo costs a share of
//! the query length; every character of lead-in costs `1 / distance`.
//!
//! # Key invariant: bounded search
//!
//! A field is accepted only at `score <= threshold` and `score < 1`. Both terms
//! are non-negative, so an accepted alignment has
//!
//! ```text
//! errors <= floor(threshold * query_len)
//! start  <= floor(threshold * distance)
//! ```
//!
//! The second bound caps how much of the field is scanned at all (see
//! [`scan_window`]).
//!
//! # Exact minimum
//!
//! The alignment DP minimizes the score itself, scaled to integers:
//!
//! ```text
//! score * query_len * distance = errors * distance + start * query_len
//! ```
//!
//! Minimizing errors first and start second is not enough: a 20-character
//! query with 8 insertions at offset 0 (0.40) beats 7 deletions at offset 15
//! (0.50).

use crate::config::SearchConfig;
use crate::fuzzy::{weighted_alignments, AlignmentCost};
use crate::utils::{normalize_with, token_spans, TokenSpan};

/// Score of a field that didn't match.
pub const NO_MATCH: f64 = 1.0;

/// Slack for float comparisons against the threshold.
pub const SCORE_EPSILON: f64 = 1e-9;

/// A query normalized once and reused against every field.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub chars: Vec<char>,
    pub tokens: Vec<String>,
    pub max_errors: usize,
}

impl PreparedQuery {
    /// Normalize `query` the way indexed text was normalized.
    ///
    /// Returns `None` when nothing is left to search for (empty or
    /// whitespace-only input).
    pub fn new(query: &str, config: &SearchConfig) -> Option<Self> {
        let normalized = normalize_with(query, config.ignore_diacritics);
        if normalized.is_empty() {
            return None;
        }
        let chars: Vec<char> = normalized.chars().collect();
        let tokens = token_spans(&normalized)
            .into_iter()
            .map(|span| span.text)
            .collect();
        let max_errors = max_errors(chars.len(), config.threshold);
        Some(Self {
            chars,
            tokens,
            max_errors,
        })
    }
}

/// Where a query landed in one text, and how well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub start: usize,
    pub end: usize,
}

/// Largest error count that can still score within `threshold`.
pub fn max_errors(query_len: usize, threshold: f64) -> usize {
    (threshold * query_len as f64 + SCORE_EPSILON).floor() as usize
}

/// Penalty for a match starting `start` characters into the field.
pub fn location_penalty(start: usize, config: &SearchConfig) -> f64 {
    if config.ignore_location || start == 0 {
        0.0
    } else if config.distance == 0 {
        NO_MATCH
    } else {
        start as f64 / config.distance as f64
    }
}

/// Combine edit errors and start offset into a distance in [0, 1].
pub fn alignment_score(errors: usize, query_len: usize, start: usize, config: &SearchConfig) -> f64 {
    if query_len == 0 {
        return NO_MATCH;
    }
    let accuracy = errors as f64 / query_len as f64;
    (accuracy + location_penalty(start, config)).min(NO_MATCH)
}

/// Is this score good enough to keep?
pub fn is_accepted(score: f64, config: &SearchConfig) -> bool {
    score < NO_MATCH && score <= config.threshold + SCORE_EPSILON
}

/// Latest offset an accepted match can start at, with location counted.
fn latest_start(config: &SearchConfig) -> usize {
    if config.distance == 0 {
        0
    } else {
        (config.threshold * config.distance as f64 + SCORE_EPSILON).floor() as usize
    }
}

/// How many leading characters of a field can contain an accepted match.
///
/// `None` means the whole field must be scanned (location ignored).
pub fn scan_window(query_len: usize, max_errors: usize, config: &SearchConfig) -> Option<usize> {
    if config.ignore_location {
        return None;
    }
    let latest_start = latest_start(config);
    Some(
        latest_start
            .saturating_add(query_len)
            .saturating_add(max_errors),
    )
}

/// Integer price of an alignment, proportional to its score.
///
/// Returns the model and the cost that any accepted alignment stays within.
pub fn alignment_cost(query: &PreparedQuery, config: &SearchConfig) -> (AlignmentCost, u128) {
    let max_errors = query.max_errors as u128;
    if config.ignore_location {
        return (AlignmentCost::EDITS, max_errors);
    }
    if config.distance == 0 {
        let model = AlignmentCost {
            per_error: 1,
            per_lead_in: None,
        };
        return (model, max_errors);
    }

    let distance = config.distance as u128;
    let query_len = query.chars.len() as u128;
    let latest_start = latest_start(config) as u128;
    let model = AlignmentCost {
        per_error: distance,
        per_lead_in: Some(query_len),
    };
    let budget = max_errors
        .saturating_mul(distance)
        .saturating_add(latest_start.saturating_mul(query_len));
    (model, budget)
}

/// Best accepted occurrence of the query in a normalized text.
///
/// Ties on score go to the earliest end position.
pub fn score_text(query: &PreparedQuery, text: &[char], config: &SearchConfig) -> Option<Scored> {
    let window = scan_window(query.chars.len(), query.max_errors, config)
        .map_or(text.len(), |w| w.min(text.len()));
    let (model, budget) = alignment_cost(query, config);

    let mut best: Option<(u128, Scored)> = None;
    for alignment in weighted_alignments(&query.chars, &text[..window], &model, budget) {
        let score = alignment_score(alignment.errors, query.chars.len(), alignment.start, config);
        if !is_accepted(score, config) {
            continue;
        }
        if best.map_or(true, |(cost, _)| alignment.cost < cost) {
            let scored = Scored {
                score,
                start: alignment.start,
                end: alignment.end,
            };
            best = Some((alignment.cost, scored));
        }
    }
    best.map(|(_, scored)| scored)
}

/// Exact token rule for tag fields.
///
/// If the query's tokens equal the tag's tokens, or appear in the tag as a
/// contiguous run, returns the character span of that run.
pub fn exact_token_span(query_tokens: &[String], tag_tokens: &[TokenSpan]) -> Option<(usize, usize)> {
    let n = query_tokens.len();
    if n == 0 || n > tag_tokens.len() {
        return None;
    }
    tag_tokens
        .windows(n)
        .find(|window| {
            window
                .iter()
                .zip(query_tokens)
                .all(|(span, token)| span.text == *token)
        })
        .map(|window| (window[0].start, window[n - 1].end))
}

/// Distance between a free-text query and a text under the default config.
///
/// Total over all inputs: returns [`NO_MATCH`] for an empty query, an empty
/// text, or anything scoring over the threshold.
pub fn distance(query: &str, text: &str) -> f64 {
    distance_with(query, text, &SearchConfig::default())
}

/// Distance between a free-text query and a text under `config`.
pub fn distance_with(query: &str, text: &str, config: &SearchConfig) -> f64 {
    let Some(query) = PreparedQuery::new(query, config) else {
        return NO_MATCH;
    };
    let text: Vec<char> = normalize_with(text, config.ignore_diacritics)
        .chars()
        .collect();
    score_text(&query, &text, config).map_or(NO_MATCH, |scored| scored.score)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on the index and on ranked results.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** while tests run
//!
//! | Contract Function                | Property                                         |
//! |----------------------------------|--------------------------------------------------|
//! | `check_index_aligned`            | one index entry per record, one text per verse   |
//! | `check_score_in_range`           | every score is in [0, 1]                         |
//! | `check_matches_within_threshold` | no match above the threshold is reported         |
//! | `check_results_ranked`           | results are in ranking order                     |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The default threshold must be a valid distance and the default weights
/// must rank tags ahead of body text.
const _: () = {
    assert!(DEFAULT_THRESHOLD >= 0.0 && DEFAULT_THRESHOLD <= 1.0);
    assert!(DEFAULT_DEITY_WEIGHT <= 1.0);
    assert!(DEFAULT_DEITY_WEIGHT >= DEFAULT_RSI_WEIGHT);
    assert!(DEFAULT_RSI_WEIGHT > DEFAULT_METER_WEIGHT);
    assert!(DEFAULT_METER_WEIGHT > DEFAULT_VERSE_WEIGHT);
    assert!(DEFAULT_VERSE_WEIGHT > 0.0);
};

use std::cmp::Ordering;

use crate::config::{
    FieldWeights, DEFAULT_DEITY_WEIGHT, DEFAULT_METER_WEIGHT, DEFAULT_RSI_WEIGHT,
    DEFAULT_THRESHOLD, DEFAULT_VERSE_WEIGHT,
};
use crate::scoring::ranking::compare_results;
use crate::scoring::SCORE_EPSILON;
use crate::types::SearchResult;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check the index has exactly one entry per record.
///
/// # Panics (debug builds only)
/// Panics if the lengths differ.
#[inline]
pub fn check_index_aligned(records_len: usize, entries_len: usize) {
    debug_assert_eq!(
        records_len, entries_len,
        "Contract violation: index has {} entries for {} records",
        entries_len, records_len
    );
}

// ============================================================================
// SCORING CONTRACTS
// ============================================================================

/// Check a score is a distance in [0, 1].
#[inline]
pub fn check_score_in_range(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: score {} outside [0, 1]",
        score
    );
}

/// Check every reported match of a result is within the threshold and that the
/// result's score is its best match's score.
#[inline]
pub fn check_matches_within_threshold(result: &SearchResult, threshold: f64) {
    debug_assert!(
        !result.matches.is_empty(),
        "Contract violation: result for {} has no matches",
        result.key()
    );
    for m in &result.matches {
        check_score_in_range(m.score);
        debug_assert!(
            m.score <= threshold + SCORE_EPSILON,
            "Contract violation: {} matched {} with score {} over threshold {}",
            result.key(),
            m.field,
            m.score,
            threshold
        );
    }
    if let Some(best) = result.best_match() {
        debug_assert!(
            best.score == result.score,
            "Contract violation: result {} scored {} but best match scored {}",
            result.key(),
            result.score,
            best.score
        );
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check results are sorted by the ranking order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_results_ranked(results: &[SearchResult], weights: &FieldWeights) {
    for i in 1..results.len() {
        debug_assert!(
            compare_results(&results[i - 1], &results[i], weights) != Ordering::Greater,
            "Contract violation: results[{}] ({}, score {}) ranked after results[{}] ({}, score {})",
            i - 1,
            results[i - 1].key(),
            results[i - 1].score,
            i,
            results[i].key(),
            results[i].score
        );
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching (Sellers' algorithm).
//!
//! Plain Levenshtein compares whole strings; a query like "fire" should match
//! "praise the fire" without paying for the eleven characters in front. The
//! semi-global variant lets an alignment begin at any text position and end
//! anywhere after it.
//!
//! Each DP cell holds the cheapest alignment under an [`AlignmentCost`], which
//! prices both edits and the lead-in before the alignment starts:
//!
//! ```text
//! cost = errors * per_error + start * per_lead_in
//! ```
//!
//! Row 0 at text position `j` starts with the lead-in price of `j`, so the DP
//! minimizes the combined cost directly. Each cell also carries its start
//! offset and error count. Among equally cheap alignments the earliest start
//! is kept.

/// Integer price of an alignment: `errors * per_error + start * per_lead_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentCost {
    pub per_error: u128,
    /// `None` forbids any lead-in: alignments must start at offset 0.
    pub per_lead_in: Option<u128>,
}

impl AlignmentCost {
    /// Edits only; every start position is free.
    pub const EDITS: Self = Self {
        per_error: 1,
        per_lead_in: Some(0),
    };

    /// Price of beginning an alignment `start` characters into the text.
    ///
    /// `None` when that start is not allowed.
    pub fn lead_in(&self, start: usize) -> Option<u128> {
        match self.per_lead_in {
            Some(price) => Some((start as u128).saturating_mul(price)),
            None => (start == 0).then_some(0),
        }
    }
}

impl Default for AlignmentCost {
    fn default() -> Self {
        Self::EDITS
    }
}

/// One approximate occurrence of a pattern in a text.
///
/// `start..end` is the character range of the text that the pattern was
/// aligned against; `errors` is the edit distance of that alignment and `cost`
/// its price under the model it was found with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub errors: usize,
    pub start: usize,
    pub end: usize,
    pub cost: u128,
}

/// Unreachable cell.
const UNREACHABLE: u128 = u128::MAX;

/// (cost, start, errors): compared in that order.
type Cell = (u128, usize, usize);

/// Every end position where `pattern` aligns to a substring of `text` within
/// `max_errors` edits, with the cheapest alignment (and earliest start) for
/// each end position. Ordered by `end`.
///
/// An empty pattern or empty text yields nothing.
pub fn alignments(pattern: &[char], text: &[char], max_errors: usize) -> Vec<Alignment> {
    weighted_alignments(pattern, text, &AlignmentCost::EDITS, max_errors as u128)
}

/// Every end position where the cheapest alignment of `pattern` under `model`
/// costs at most `budget`. Ordered by `end`.
///
/// An empty pattern or empty text yields nothing.
pub fn weighted_alignments(
    pattern: &[char],
    text: &[char],
    model: &AlignmentCost,
    budget: u128,
) -> Vec<Alignment> {
    let m = pattern.len();
    let mut found = Vec::new();

    if m == 0 || text.is_empty() {
        return found;
    }

    // Early-exit: aligning against at most text.len() characters costs at least
    // the surplus of pattern characters
    let surplus = m.saturating_sub(text.len()) as u128;
    if surplus.saturating_mul(model.per_error) > budget {
        return found;
    }

    let edit = |cell: Cell, errors: usize| -> Cell {
        if cell.0 == UNREACHABLE || errors == 0 {
            return cell;
        }
        (cell.0.saturating_add(model.per_error), cell.1, cell.2 + errors)
    };

    // column[i]: cheapest alignment of pattern[..i] ending at the current text
    // position. Before any text, pattern[..i] costs i deletions from offset 0.
    let mut column: Vec<Cell> = (0..=m)
        .map(|i| ((i as u128).saturating_mul(model.per_error), 0, i))
        .collect();
    let mut next: Vec<Cell> = vec![(UNREACHABLE, 0, 0); m + 1];

    for (j, tc) in text.iter().enumerate() {
        next[0] = (model.lead_in(j + 1).unwrap_or(UNREACHABLE), j + 1, 0);

        for i in 1..=m {
            let substitute = edit(column[i - 1], usize::from(pattern[i - 1] != *tc));
            let skip_text = edit(column[i], 1);
            let skip_pattern = edit(next[i - 1], 1);
            next[i] = substitute.min(skip_text).min(skip_pattern);
        }

        let (cost, start, errors) = next[m];
        if cost != UNREACHABLE && cost <= budget {
            found.push(Alignment {
                errors,
                start,
                end: j + 1,
                cost,
            });
        }

        std::mem::swap(&mut column, &mut next);
    }

    found
}

/// The fewest edits needed to align `pattern` to any substring of `text`,
/// if that is within `max_errors`.
pub fn best_alignment(pattern: &[char], text: &[char], max_errors: usize) -> Option<Alignment> {
    alignments(pattern, text, max_errors)
        .into_iter()
        .min_by_key(|a| (a.cost, a.start))
}

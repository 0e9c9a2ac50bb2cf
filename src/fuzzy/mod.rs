// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two pieces here: plain Levenshtein distance between whole strings, and
//! approximate substring alignment (the query against any stretch of a field),
//! which is what field scoring is built on.

mod alignment;
mod levenshtein;

pub use alignment::*;
pub use levenshtein::*;

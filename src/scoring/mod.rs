// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are distances, not similarities: 0 is a perfect match, 1 is no
//! match. A record's score is its best field's score; weights never scale a
//! score, they only decide which of two equally good matches ranks first.

mod core;
pub mod ranking;

pub use core::*;

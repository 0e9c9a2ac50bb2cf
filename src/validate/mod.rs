// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus validation: a full audit of a corpus before it is published.
//!
//! The flattener rejects only what makes a corpus unsearchable (missing
//! arrays, duplicate keys) and stops at the first problem. Validation goes
//! further and reports *every* issue it finds, including content gaps that
//! the engine tolerates: empty verse text, missing attribution, mandala
//! numbers outside the ten books.
//!
//! Validation is advisory. Nothing in the engine requires a clean report.

mod report;

pub use report::*;

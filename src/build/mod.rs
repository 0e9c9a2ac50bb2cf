// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting from a corpus file to the flat record list the index is built on.
//!
//! Loading (disk + JSON) and flattening (tree → records) are separate steps:
//! the engine only ever sees an already-parsed [`Corpus`](crate::Corpus), so
//! callers that get their data some other way skip the loader entirely.

pub mod flatten;
pub mod loader;

pub use flatten::*;
pub use loader::*;

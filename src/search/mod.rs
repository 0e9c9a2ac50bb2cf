// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: scoring every record against a query, and the engine that owns the
//! live index.
//!
//! [`search`] is a pure function over an immutable [`SearchIndex`](crate::SearchIndex).
//! [`SearchEngine`] adds the lifecycle on top: build once per corpus load,
//! swap atomically, answer queries from whatever index is current.

mod engine;
mod query;

pub use engine::*;
pub use query::*;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The long-lived search engine.
//!
//! An engine starts empty and is (re)initialized from a [`Corpus`]. The new
//! index is built without holding any lock and published with a single
//! pointer swap, so a concurrent reader sees either the old index or the new
//! one in full. Queries clone the current `Arc` and run lock-free.
//!
//! ```text
//! initialize(corpus)
//!     │  flatten_corpus ──▶ Err ─▶ old index stays live
//!     ▼
//! SearchIndex::build        (no lock held)
//!     │
//!     ▼
//! write lock: *index = Some(new)   (pointer swap)
//! ```

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use rand::Rng;
use tracing::{debug, trace};

use crate::build::flatten_corpus;
use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::{ConfigError, MalformedCorpus};
use crate::index::SearchIndex;
use crate::types::{Record, SearchResult};

use super::query::search;

/// Fuzzy search over one corpus at a time.
///
/// `SearchEngine` is `Send + Sync`; share it behind an `Arc` and call
/// [`initialize`](Self::initialize) from any thread.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    index: RwLock<Option<Arc<SearchIndex>>>,
}

impl SearchEngine {
    /// An uninitialized engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// An uninitialized engine with a validated custom configuration.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            index: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Flatten `corpus`, index it, and make it the live index.
    ///
    /// On error nothing changes: whatever was searchable before stays
    /// searchable. Calling this twice with the same corpus yields an engine
    /// that answers every query identically.
    pub fn initialize(&self, corpus: &Corpus) -> Result<(), MalformedCorpus> {
        let started = Instant::now();
        let records = flatten_corpus(corpus)?;
        let index = Arc::new(SearchIndex::build(records, self.config.clone()));

        debug!(
            records = index.len(),
            mandalas = index.group_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Search index built"
        );

        *self.index.write() = Some(index);
        Ok(())
    }

    /// The current index, if any. Holding the snapshot keeps it alive across
    /// later re-initializations.
    pub fn snapshot(&self) -> Option<Arc<SearchIndex>> {
        self.index.read().clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.index.read().is_some()
    }

    /// Number of indexed records (0 before initialization).
    pub fn len(&self) -> usize {
        self.snapshot().map_or(0, |index| index.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every record matching `query`, best first. Empty before initialization.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let Some(index) = self.snapshot() else {
            trace!("Search before initialization");
            return Vec::new();
        };
        let results = search(&index, query);
        trace!(query, results = results.len(), "Search complete");
        results
    }

    /// The `limit` best results.
    pub fn search_limit(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }

    /// All records in original order. Empty before initialization.
    pub fn all_records(&self) -> Vec<Arc<Record>> {
        self.snapshot()
            .map(|index| index.records().to_vec())
            .unwrap_or_default()
    }

    /// Records of one mandala in original order. Empty for an unknown mandala.
    pub fn records_in_group(&self, mandala: u32) -> Vec<Arc<Record>> {
        self.snapshot()
            .map(|index| index.records_in_group(mandala))
            .unwrap_or_default()
    }

    /// A uniformly chosen record, or `None` when there are none.
    ///
    /// The caller owns the randomness; seed the `rng` for reproducible picks.
    pub fn random_record<R: Rng>(&self, rng: &mut R) -> Option<Arc<Record>> {
        let index = self.snapshot()?;
        if index.is_empty() {
            return None;
        }
        index.record(rng.random_range(0..index.len())).cloned()
    }
}

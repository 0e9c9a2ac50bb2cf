// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index: records plus their pre-normalized field texts.
//!
//! Normalization (case folding, diacritic folding, whitespace collapsing) and
//! tag tokenization happen once here instead of on every query. Each record
//! gets one [`IndexedField`] per [`SearchField`], in declaration order; tag
//! fields hold one text, body fields hold one text per verse.
//!
//! # Invariants
//!
//! - `entries.len() == records.len()`, and `entries[i]` describes `records[i]`
//! - `groups[m]` lists the positions of mandala `m`'s records in ascending order
//!
//! A `SearchIndex` is immutable once built. Rebuilding means building a new
//! one, which is how the engine keeps readers from ever seeing a partial index.

use std::collections::BTreeMap;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::contracts::check_index_aligned;
use crate::types::{Record, SearchField};
use crate::utils::{normalize_with, token_spans, TokenSpan};

/// One normalized text of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedText {
    pub chars: Vec<char>,
    /// Token spans, kept for tag fields only.
    pub tokens: Vec<TokenSpan>,
}

/// All normalized texts of one field of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedField {
    pub field: SearchField,
    pub texts: Vec<IndexedText>,
}

#[derive(Debug)]
pub struct SearchIndex {
    records: Vec<Arc<Record>>,
    entries: Vec<Vec<IndexedField>>,
    groups: BTreeMap<u32, Vec<usize>>,
    config: SearchConfig,
}

fn index_text(text: &str, is_tag: bool, config: &SearchConfig) -> IndexedText {
    let normalized = normalize_with(text, config.ignore_diacritics);
    let tokens = if is_tag {
        token_spans(&normalized)
    } else {
        Vec::new()
    };
    IndexedText {
        chars: normalized.chars().collect(),
        tokens,
    }
}

fn index_record(record: &Record, config: &SearchConfig) -> Vec<IndexedField> {
    SearchField::ALL
        .iter()
        .map(|&field| IndexedField {
            field,
            texts: record
                .field_texts(field)
                .into_iter()
                .map(|text| index_text(text, field.is_tag(), config))
                .collect(),
        })
        .collect()
}

impl SearchIndex {
    /// Build an index over already-flattened records.
    ///
    /// Record order is preserved: position `i` in `records` is the
    /// `original_index` reported for that record.
    pub fn build(records: Vec<Record>, config: SearchConfig) -> Self {
        let entries: Vec<Vec<IndexedField>> = {
            #[cfg(feature = "parallel")]
            {
                records
                    .par_iter()
                    .map(|record| index_record(record, &config))
                    .collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                records
                    .iter()
                    .map(|record| index_record(record, &config))
                    .collect()
            }
        };

        let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            groups.entry(record.mandala).or_default().push(position);
        }

        let records: Vec<Arc<Record>> = records.into_iter().map(Arc::new).collect();
        check_index_aligned(records.len(), entries.len());

        Self {
            records,
            entries,
            groups,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The configuration this index was normalized and is scored with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// All records in original order.
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn record(&self, position: usize) -> Option<&Arc<Record>> {
        self.records.get(position)
    }

    /// Indexed fields of the record at `position`, in [`SearchField::ALL`] order.
    pub fn fields(&self, position: usize) -> &[IndexedField] {
        self.entries.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct mandala numbers, ascending.
    pub fn group_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.groups.keys().copied()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Records of one mandala, in original order. Empty for an unknown mandala.
    pub fn records_in_group(&self, mandala: u32) -> Vec<Arc<Record>> {
        self.groups
            .get(&mandala)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| Arc::clone(&self.records[position]))
                    .collect()
            })
            .unwrap_or_default()
    }
}

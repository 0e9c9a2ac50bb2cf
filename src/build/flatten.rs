// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus flattener: mandalas of suktas become one list of records.
//!
//! Traversal order is preserved exactly (mandala by mandala, sukta by sukta),
//! because a record's position in this list is its `original_index` and the
//! final tiebreaker in ranking. Nothing is filtered: a sukta with no verses
//! still becomes a record so it can be found by deity, seer or meter.

use std::collections::HashSet;

use crate::corpus::Corpus;
use crate::error::MalformedCorpus;
use crate::types::Record;

/// Flatten a corpus into records, in traversal order.
///
/// Fails if a mandala has no `suktas` array, a sukta has no `verses` array,
/// or two suktas share a `(mandala, suktaNumber)` key. Empty arrays are fine.
pub fn flatten_corpus(corpus: &Corpus) -> Result<Vec<Record>, MalformedCorpus> {
    let mut records = Vec::with_capacity(corpus.total_sukta_count());
    let mut seen = HashSet::with_capacity(records.capacity());

    for (position, mandala) in corpus.mandalas.iter().enumerate() {
        let suktas = mandala
            .suktas
            .as_ref()
            .ok_or(MalformedCorpus::MissingSuktas {
                mandala: mandala.mandala,
                position,
            })?;

        for (position, sukta) in suktas.iter().enumerate() {
            let verses = sukta
                .verses
                .as_ref()
                .ok_or(MalformedCorpus::MissingVerses {
                    mandala: mandala.mandala,
                    sukta: sukta.sukta_number,
                    position,
                })?;

            let record = Record {
                mandala: mandala.mandala,
                sukta_number: sukta.sukta_number,
                sukta_id: sukta.sukta_id.clone(),
                deity: sukta.deity.clone(),
                rsi: sukta.rsi.clone(),
                meter: sukta.meter.clone(),
                verses: verses.clone(),
            };

            let key = record.key();
            if !seen.insert(key) {
                return Err(MalformedCorpus::DuplicateKey { key });
            }
            records.push(record);
        }
    }

    Ok(records)
}

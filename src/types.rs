// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The searchable side of the corpus: flattened records and what a query returns.
//!
//! A [`Record`] is one sukta lifted out of its mandala, carrying the mandala
//! number along so nothing needs to walk the tree again. Records are built once
//! by the flattener and never mutated afterwards; the index and every search
//! result share them through `Arc`.
//!
//! # Field map
//!
//! | `SearchField`     | Role          | Source                       | Default weight |
//! |-------------------|---------------|------------------------------|----------------|
//! | `Deity`           | primary tag   | `sukta.deity`                | 0.3            |
//! | `Rsi`             | secondary tag | `sukta.rsi`                  | 0.3            |
//! | `Meter`           | tertiary tag  | `sukta.meter`                | 0.2            |
//! | `SanskritDeva`    | body text     | `verses[].sanskrit_deva`     | 0.1            |
//! | `Transliteration` | body text     | `verses[].transliteration`   | 0.1            |
//! | `Translation`     | body text     | `verses[].translation.text`  | 0.1            |

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::corpus::Verse;

/// Identity of a record: mandala number plus sukta number.
///
/// Displayed as `"{mandala}.{sukta}"`, the conventional citation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub mandala: u32,
    pub sukta: u32,
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.mandala, self.sukta)
    }
}

/// One flattened, searchable sukta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Group identifier: the containing mandala's number.
    pub mandala: u32,
    /// Item number within the mandala.
    pub sukta_number: u32,
    pub sukta_id: String,
    pub deity: String,
    pub rsi: String,
    pub meter: String,
    pub verses: Vec<Verse>,
}

impl Record {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            mandala: self.mandala,
            sukta: self.sukta_number,
        }
    }

    /// Text of a tag field, or `None` for body fields.
    pub fn tag(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Deity => Some(&self.deity),
            SearchField::Rsi => Some(&self.rsi),
            SearchField::Meter => Some(&self.meter),
            _ => None,
        }
    }

    /// Every text the field contributes: one entry for a tag, one per verse for
    /// a body projection (possibly none).
    pub fn field_texts(&self, field: SearchField) -> Vec<&str> {
        match self.tag(field) {
            Some(tag) => vec![tag],
            None => self
                .verses
                .iter()
                .filter_map(|verse| field.verse_text(verse))
                .collect(),
        }
    }
}

/// A named searchable attribute of a [`Record`].
///
/// The declaration order is the final tiebreaker when two fields of the same
/// record score and weigh the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Deity,
    Rsi,
    Meter,
    SanskritDeva,
    Transliteration,
    Translation,
}

impl SearchField {
    pub const ALL: [SearchField; 6] = [
        SearchField::Deity,
        SearchField::Rsi,
        SearchField::Meter,
        SearchField::SanskritDeva,
        SearchField::Transliteration,
        SearchField::Translation,
    ];

    /// Short categorical fields get the exact token rule; body text doesn't.
    pub fn is_tag(self) -> bool {
        matches!(
            self,
            SearchField::Deity | SearchField::Rsi | SearchField::Meter
        )
    }

    /// The field's path in the corpus JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Deity => "deity",
            SearchField::Rsi => "rsi",
            SearchField::Meter => "meter",
            SearchField::SanskritDeva => "verses.sanskrit_deva",
            SearchField::Transliteration => "verses.transliteration",
            SearchField::Translation => "verses.translation.text",
        }
    }

    /// The projection of a verse this field reads, or `None` for tag fields.
    pub fn verse_text(self, verse: &Verse) -> Option<&str> {
        match self {
            SearchField::SanskritDeva => Some(&verse.sanskrit_deva),
            SearchField::Transliteration => Some(&verse.transliteration),
            SearchField::Translation => Some(&verse.translation.text),
            _ => None,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how well the query matched one field of one record.
///
/// `start..end` are character offsets into the *normalized* field text
/// (lowercased, whitespace collapsed, diacritics folded if configured), not
/// into the raw corpus string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field: SearchField,
    /// Which verse matched, for body fields.
    pub verse_index: Option<usize>,
    /// Distance in [0, 1]; 0 is a perfect match.
    pub score: f64,
    pub start: usize,
    pub end: usize,
}

/// One ranked hit.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub record: Arc<Record>,
    /// Aggregate distance in [0, 1]; lower is better.
    pub score: f64,
    /// Position of the record in the unsorted record list.
    pub original_index: usize,
    /// Every field that matched within the threshold, best first.
    pub matches: Vec<FieldMatch>,
}

impl SearchResult {
    pub fn key(&self) -> RecordKey {
        self.record.key()
    }

    /// The field that decided this result's score.
    pub fn best_match(&self) -> Option<&FieldMatch> {
        self.matches.first()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus as it arrives from disk: mandalas holding suktas holding verses.
//!
//! These types mirror the JSON shape one-to-one, including its naming quirks
//! (`sanskrit_deva` is snake_case while everything else is camelCase). The
//! `suktas` and `verses` arrays are optional on purpose: a missing array is the
//! structural violation the flattener reports as [`MalformedCorpus`], while an
//! empty array is perfectly valid.
//!
//! [`MalformedCorpus`]: crate::MalformedCorpus

use serde::{Deserialize, Serialize};

/// A translation of one verse, with attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub text: String,
    pub source: String,
    pub license: String,
}

/// One verse (ṛc) in three projections: Devanagari, IAST and English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Verse {
    pub verse_number: u32,
    #[serde(rename = "sanskrit_deva")]
    pub sanskrit_deva: String,
    pub transliteration: String,
    pub translation: Translation,
}

/// One hymn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sukta {
    #[serde(default)]
    pub sukta_id: String,
    #[serde(default)]
    pub sukta_number: u32,
    /// Seer the hymn is attributed to.
    #[serde(default)]
    pub rsi: String,
    #[serde(default)]
    pub deity: String,
    #[serde(default)]
    pub meter: String,
    /// `None` when the field is absent from the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses: Option<Vec<Verse>>,
}

/// One of the ten books of the Rigveda.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mandala {
    pub mandala: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suktas: Option<Vec<Sukta>>,
}

/// The whole collection, exactly as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub mandalas: Vec<Mandala>,
}

impl Corpus {
    /// Number of mandalas present.
    pub fn mandala_count(&self) -> usize {
        self.mandalas.len()
    }

    /// Number of suktas in the given mandala, or 0 if it isn't present.
    ///
    /// When a mandala number appears more than once the first occurrence wins,
    /// matching how lookups by number behave everywhere else.
    pub fn sukta_count(&self, mandala: u32) -> usize {
        self.mandalas
            .iter()
            .find(|m| m.mandala == mandala)
            .and_then(|m| m.suktas.as_ref())
            .map_or(0, Vec::len)
    }

    pub fn total_sukta_count(&self) -> usize {
        self.suktas().count()
    }

    pub fn total_verse_count(&self) -> usize {
        self.suktas()
            .map(|s| s.verses.as_ref().map_or(0, Vec::len))
            .sum()
    }

    /// Does any mandala actually hold hymns?
    ///
    /// A corpus file can be syntactically fine but empty (a placeholder that
    /// was never filled in); loaders use this to decide whether to fall back.
    pub fn has_content(&self) -> bool {
        self.mandalas
            .iter()
            .any(|m| m.suktas.as_ref().is_some_and(|s| !s.is_empty()))
    }

    /// All suktas across all mandalas, skipping mandalas without a suktas array.
    pub fn suktas(&self) -> impl Iterator<Item = &Sukta> {
        self.mandalas
            .iter()
            .filter_map(|m| m.suktas.as_deref())
            .flatten()
    }
}

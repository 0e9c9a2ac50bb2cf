// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: field weights, acceptance threshold, location penalty.
//!
//! Passed to the engine at construction and fixed for its lifetime. The
//! defaults rank tag fields ahead of verse text; everything is overridable
//! from a JSON file so tests (and curious users) can try unusual weightings.
//!
//! ```json
//! { "weights": { "deity": 0.5 }, "threshold": 0.3, "ignoreLocation": true }
//! ```
//!
//! Keys that are left out keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::SearchField;

/// Default acceptance threshold on the [0, 1] distance scale.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Default number of characters over which the start-offset penalty reaches 1.
pub const DEFAULT_DISTANCE: usize = 100;

/// Default weight of the deity tag.
pub const DEFAULT_DEITY_WEIGHT: f64 = 0.3;

/// Default weight of the seer tag.
pub const DEFAULT_RSI_WEIGHT: f64 = 0.3;

/// Default weight of the meter tag.
pub const DEFAULT_METER_WEIGHT: f64 = 0.2;

/// Default weight of each verse projection (Devanagari, IAST, English).
pub const DEFAULT_VERSE_WEIGHT: f64 = 0.1;

/// Relevance weight per field, each in (0, 1]. They need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldWeights {
    pub deity: f64,
    pub rsi: f64,
    pub meter: f64,
    pub sanskrit_deva: f64,
    pub transliteration: f64,
    pub translation: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            deity: DEFAULT_DEITY_WEIGHT,
            rsi: DEFAULT_RSI_WEIGHT,
            meter: DEFAULT_METER_WEIGHT,
            sanskrit_deva: DEFAULT_VERSE_WEIGHT,
            transliteration: DEFAULT_VERSE_WEIGHT,
            translation: DEFAULT_VERSE_WEIGHT,
        }
    }
}

impl FieldWeights {
    pub fn get(&self, field: SearchField) -> f64 {
        match field {
            SearchField::Deity => self.deity,
            SearchField::Rsi => self.rsi,
            SearchField::Meter => self.meter,
            SearchField::SanskritDeva => self.sanskrit_deva,
            SearchField::Transliteration => self.transliteration,
            SearchField::Translation => self.translation,
        }
    }

    pub fn set(&mut self, field: SearchField, weight: f64) {
        let slot = match field {
            SearchField::Deity => &mut self.deity,
            SearchField::Rsi => &mut self.rsi,
            SearchField::Meter => &mut self.meter,
            SearchField::SanskritDeva => &mut self.sanskrit_deva,
            SearchField::Transliteration => &mut self.transliteration,
            SearchField::Translation => &mut self.translation,
        };
        *slot = weight;
    }
}

/// Everything that shapes scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub weights: FieldWeights,
    /// Maximum per-field distance admitted into results.
    pub threshold: f64,
    /// A match starting this many characters into a field is penalized by a
    /// full 1.0. Zero means any match not at offset 0 is a miss.
    pub distance: usize,
    /// Score matches without regard to where in the field they start.
    pub ignore_location: bool,
    /// Fold Latin combining marks (IAST ā, ś, ṛ, ṃ) before matching.
    pub ignore_diacritics: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            ignore_location: false,
            ignore_diacritics: true,
        }
    }
}

impl SearchConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_weight(mut self, field: SearchField, weight: f64) -> Self {
        self.weights.set(field, weight);
        self
    }

    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_ignore_location(mut self, ignore: bool) -> Self {
        self.ignore_location = ignore;
        self
    }

    pub fn with_ignore_diacritics(mut self, ignore: bool) -> Self {
        self.ignore_diacritics = ignore;
        self
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in SearchField::ALL {
            let weight = self.weights.get(field);
            if !(weight.is_finite() && weight > 0.0 && weight <= 1.0) {
                return Err(ConfigError::InvalidWeight { field, weight });
            }
        }
        if !(self.threshold.is_finite() && (0.0..=1.0).contains(&self.threshold)) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

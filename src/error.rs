// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Each variant carries the coordinates needed to find the offending spot in
//! the input: which mandala, which sukta, which position in the array. Nothing
//! in the library retries or recovers from these; that is the caller's call.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{RecordKey, SearchField};

/// Structural violation found while flattening a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedCorpus {
    /// A mandala has no `suktas` array at all.
    #[error("mandala {mandala} (position {position}) has no suktas array")]
    MissingSuktas { mandala: u32, position: usize },
    /// A sukta has no `verses` array at all.
    #[error("sukta {sukta} of mandala {mandala} (position {position}) has no verses array")]
    MissingVerses {
        mandala: u32,
        sukta: u32,
        position: usize,
    },
    /// Two suktas share the same mandala and sukta number.
    #[error("duplicate record key {key}")]
    DuplicateKey { key: RecordKey },
}

/// Rejected search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("weight for {field} must be in (0, 1], got {weight}")]
    InvalidWeight { field: SearchField, weight: f64 },
    #[error("threshold must be in [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to get a corpus off disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid corpus JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Neither the primary corpus nor the fallback sample could be used.
    #[error("no usable corpus: primary {primary}; fallback: {fallback}")]
    Unavailable {
        primary: String,
        #[source]
        fallback: Box<LoadError>,
    },
}

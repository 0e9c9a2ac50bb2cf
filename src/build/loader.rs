// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading a corpus from disk, with a fallback to bundled sample data.
//!
//! The full corpus is large and not always present (fresh checkouts ship only
//! the sample). A primary file that is missing, unparsable, or parses but
//! holds no hymns is skipped in favor of the fallback.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::corpus::Corpus;
use crate::error::LoadError;

/// Parse a corpus from JSON text.
pub fn parse_corpus(json: &str) -> Result<Corpus, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus = parse_corpus(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        mandalas = corpus.mandala_count(),
        suktas = corpus.total_sukta_count(),
        "corpus loaded"
    );
    Ok(corpus)
}

/// Load `primary` if it holds hymns, otherwise `fallback`.
///
/// The fallback is used as-is, even if it is itself empty.
pub fn load_corpus_with_fallback(
    primary: impl AsRef<Path>,
    fallback: impl AsRef<Path>,
) -> Result<Corpus, LoadError> {
    let primary = primary.as_ref();
    let reason = match load_corpus(primary) {
        Ok(corpus) if corpus.has_content() => return Ok(corpus),
        Ok(_) => {
            info!(path = %primary.display(), "main corpus is empty, falling back to sample data");
            format!("{} holds no hymns", primary.display())
        }
        Err(err) => {
            info!(error = %err, "main corpus not available, falling back to sample data");
            err.to_string()
        }
    };

    load_corpus(fallback).map_err(|err| LoadError::Unavailable {
        primary: reason,
        fallback: Box::new(err),
    })
}

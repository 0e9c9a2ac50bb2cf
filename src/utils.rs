//! Text normalization and tokenization shared by indexing and querying.
//!
//! Both sides of every comparison go through the same [`normalize_with`], so
//! offsets reported in matches are offsets into normalized text.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize with diacritic folding on: lowercase, strip Latin combining marks,
/// collapse whitespace.
///
/// - "Viśvāmitra" → "visvamitra"
/// - "agním īḷe" → "agnim ile"
/// - "अग्निमीळे" → "अग्निमीळे" (Devanagari untouched)
pub fn normalize(value: &str) -> String {
    normalize_with(value, true)
}

/// Normalize for search.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD decompose and drop combining diacritical marks when folding,
///    NFC compose otherwise (so precomposed and decomposed input agree)
/// 2. Lowercase
/// 3. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// Lowercase and collapse whitespace only; `fold_diacritics` is ignored.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_with(value: &str, fold_diacritics: bool) -> String {
    let composed: String = if fold_diacritics {
        value.nfd().filter(|c| !is_combining_mark(*c)).collect()
    } else {
        value.nfc().collect()
    };
    collapse_whitespace(&composed.to_lowercase())
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_with(value: &str, _fold_diacritics: bool) -> String {
    collapse_whitespace(&value.to_lowercase())
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Is this a Latin-script combining diacritic?
///
/// Devanagari vowel signs, virama and nukta are combining marks as well, but
/// they change the letter, so only the generic diacritic blocks are folded.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// A token of normalized text with its character span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || matches!(c, '।' | '॥' | '–' | '—' | '‘' | '’' | '“' | '”')
}

/// Split text into tokens on whitespace, punctuation and dandas.
///
/// Spans are character offsets, so they line up with match offsets.
pub fn token_spans(text: &str) -> Vec<TokenSpan> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (offset, c) in text.chars().enumerate() {
        if is_separator(c) {
            if !current.is_empty() {
                spans.push(TokenSpan {
                    text: std::mem::take(&mut current),
                    start,
                    end: offset,
                });
            }
        } else {
            if current.is_empty() {
                start = offset;
            }
            current.push(c);
        }
    }

    if !current.is_empty() {
        let end = start + current.chars().count();
        spans.push(TokenSpan {
            text: current,
            start,
            end,
        });
    }

    spans
}

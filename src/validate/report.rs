// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use thiserror::Error;

use crate::corpus::{Corpus, Sukta, Verse};

/// Mandalas of the Rigveda are numbered 1 through 10.
pub const MANDALA_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// One problem found in a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("corpus has no mandalas")]
    NoMandalas,
    #[error("mandala {mandala} is outside 1..=10")]
    MandalaOutOfRange { mandala: u32 },
    #[error("mandala {mandala} has no suktas array")]
    MissingSuktas { mandala: u32 },
    /// A required string field of a sukta is absent or empty.
    #[error("sukta {mandala}.{sukta} is missing {field}")]
    MissingField {
        mandala: u32,
        sukta: u32,
        field: &'static str,
    },
    #[error("sukta {mandala}.{sukta} has no verses")]
    NoVerses { mandala: u32, sukta: u32 },
    #[error("verse {position} of sukta {mandala}.{sukta} has number {number}, expected >= 1")]
    InvalidVerseNumber {
        mandala: u32,
        sukta: u32,
        position: usize,
        number: u32,
    },
    #[error("verse {verse} of sukta {mandala}.{sukta} has empty {field}")]
    EmptyVerseText {
        mandala: u32,
        sukta: u32,
        verse: u32,
        field: &'static str,
    },
    /// Translation text, source or license is missing.
    #[error("verse {verse} of sukta {mandala}.{sukta} has incomplete translation ({field})")]
    IncompleteTranslation {
        mandala: u32,
        sukta: u32,
        verse: u32,
        field: &'static str,
    },
    #[error("suktaId {sukta_id} appears {count} times")]
    DuplicateSuktaId { sukta_id: String, count: usize },
    #[error("sukta {mandala}.{sukta} appears {count} times")]
    DuplicateSuktaNumber {
        mandala: u32,
        sukta: u32,
        count: usize,
    },
}

/// Outcome of [`validate_corpus`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub mandalas: usize,
    pub suktas: usize,
    pub verses: usize,
    /// Every issue, in the order the corpus was walked. Duplicate checks
    /// come last.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Audit the whole corpus and collect every issue.
pub fn validate_corpus(corpus: &Corpus) -> ValidationReport {
    let mut report = ValidationReport {
        mandalas: corpus.mandala_count(),
        suktas: corpus.total_sukta_count(),
        verses: corpus.total_verse_count(),
        issues: Vec::new(),
    };

    if corpus.mandalas.is_empty() {
        report.issues.push(ValidationIssue::NoMandalas);
        return report;
    }

    // Counted in first-seen order so duplicate reports are deterministic
    let mut ids: Vec<(&str, usize)> = Vec::new();
    let mut id_positions: HashMap<&str, usize> = HashMap::new();
    let mut numbers: Vec<((u32, u32), usize)> = Vec::new();
    let mut number_positions: HashMap<(u32, u32), usize> = HashMap::new();

    for mandala in &corpus.mandalas {
        if !MANDALA_RANGE.contains(&mandala.mandala) {
            report.issues.push(ValidationIssue::MandalaOutOfRange {
                mandala: mandala.mandala,
            });
        }
        let Some(suktas) = &mandala.suktas else {
            report.issues.push(ValidationIssue::MissingSuktas {
                mandala: mandala.mandala,
            });
            continue;
        };

        for sukta in suktas {
            check_sukta(mandala.mandala, sukta, &mut report.issues);

            if !sukta.sukta_id.is_empty() {
                let slot = *id_positions.entry(sukta.sukta_id.as_str()).or_insert_with(|| {
                    ids.push((sukta.sukta_id.as_str(), 0));
                    ids.len() - 1
                });
                ids[slot].1 += 1;
            }
            let key = (mandala.mandala, sukta.sukta_number);
            let slot = *number_positions.entry(key).or_insert_with(|| {
                numbers.push((key, 0));
                numbers.len() - 1
            });
            numbers[slot].1 += 1;
        }
    }

    report.issues.extend(
        ids.into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(id, count)| ValidationIssue::DuplicateSuktaId {
                sukta_id: id.to_string(),
                count,
            }),
    );
    report.issues.extend(
        numbers
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|((mandala, sukta), count)| ValidationIssue::DuplicateSuktaNumber {
                mandala,
                sukta,
                count,
            }),
    );

    report
}

fn check_sukta(mandala: u32, sukta: &Sukta, issues: &mut Vec<ValidationIssue>) {
    let number = sukta.sukta_number;
    let required = [
        ("suktaId", sukta.sukta_id.as_str()),
        ("rsi", sukta.rsi.as_str()),
        ("deity", sukta.deity.as_str()),
        ("meter", sukta.meter.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::MissingField {
                mandala,
                sukta: number,
                field,
            });
        }
    }

    match sukta.verses.as_deref() {
        None | Some([]) => issues.push(ValidationIssue::NoVerses {
            mandala,
            sukta: number,
        }),
        Some(verses) => {
            for (position, verse) in verses.iter().enumerate() {
                check_verse(mandala, number, position, verse, issues);
            }
        }
    }
}

fn check_verse(mandala: u32, sukta: u32, position: usize, verse: &Verse, issues: &mut Vec<ValidationIssue>) {
    if verse.verse_number < 1 {
        issues.push(ValidationIssue::InvalidVerseNumber {
            mandala,
            sukta,
            position,
            number: verse.verse_number,
        });
    }

    let number = verse.verse_number;
    for (field, value) in [
        ("sanskrit_deva", &verse.sanskrit_deva),
        ("transliteration", &verse.transliteration),
    ] {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::EmptyVerseText {
                mandala,
                sukta,
                verse: number,
                field,
            });
        }
    }

    let translation = &verse.translation;
    for (field, value) in [
        ("text", &translation.text),
        ("source", &translation.source),
        ("license", &translation.license),
    ] {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::IncompleteTranslation {
                mandala,
                sukta,
                verse: number,
                field,
            });
        }
    }
}

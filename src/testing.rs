//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical corpus fixtures to avoid duplication.

#![doc(hidden)]

use crate::corpus::{Corpus, Mandala, Sukta, Translation, Verse};

/// Create a verse with only an English translation.
pub fn make_verse(number: u32, translation: &str) -> Verse {
    Verse {
        verse_number: number,
        sanskrit_deva: String::new(),
        transliteration: String::new(),
        translation: Translation {
            text: translation.to_string(),
            source: "Griffith".to_string(),
            license: "Public Domain".to_string(),
        },
    }
}

/// Create a verse with all three projections.
pub fn make_full_verse(number: u32, deva: &str, iast: &str, translation: &str) -> Verse {
    Verse {
        sanskrit_deva: deva.to_string(),
        transliteration: iast.to_string(),
        ..make_verse(number, translation)
    }
}

/// Create a sukta with a derived `suktaId` of `"?.{number}"`.
pub fn make_sukta(number: u32, deity: &str, rsi: &str, meter: &str, verses: Vec<Verse>) -> Sukta {
    Sukta {
        sukta_id: format!("?.{}", number),
        sukta_number: number,
        rsi: rsi.to_string(),
        deity: deity.to_string(),
        meter: meter.to_string(),
        verses: Some(verses),
    }
}

/// Create a mandala and stamp its number into the suktas' ids.
pub fn make_mandala(number: u32, suktas: Vec<Sukta>) -> Mandala {
    let suktas = suktas
        .into_iter()
        .map(|mut sukta| {
            sukta.sukta_id = format!("{}.{}", number, sukta.sukta_number);
            sukta
        })
        .collect();
    Mandala {
        mandala: number,
        suktas: Some(suktas),
    }
}

/// The two-hymn corpus used throughout the docs: Agni and Indra, both by
/// Vishvamitra.
pub fn scenario_corpus() -> Corpus {
    Corpus {
        mandalas: vec![make_mandala(
            1,
            vec![
                make_sukta(
                    1,
                    "Agni",
                    "Vishvamitra",
                    "Gayatri",
                    vec![make_verse(1, "praise the fire")],
                ),
                make_sukta(
                    2,
                    "Indra",
                    "Vishvamitra",
                    "Trishtubh",
                    vec![make_verse(1, "praise the storm")],
                ),
            ],
        )],
    }
}

/// A small multi-mandala corpus with Devanagari, IAST and translations.
pub fn sample_corpus() -> Corpus {
    Corpus {
        mandalas: vec![
            make_mandala(
                1,
                vec![
                    make_sukta(
                        1,
                        "Agni",
                        "Madhuchchhandas Vaishvamitra",
                        "Gayatri",
                        vec![
                            make_full_verse(
                                1,
                                "अग्निमीळे पुरोहितं यज्ञस्य देवमृत्विजम्",
                                "agním īḷe puróhitaṃ yajñásya devám ṛtvíjam",
                                "I laud Agni, the chosen Priest, God, minister of sacrifice",
                            ),
                            make_full_verse(
                                2,
                                "अग्निः पूर्वेभिरृषिभिरीड्यो नूतनैरुत",
                                "agníḥ pū́rvebhir ṛ́ṣibhir ī́ḍyo nū́tanair utá",
                                "Worthy is Agni to be praised by living as by ancient seers",
                            ),
                        ],
                    ),
                    make_sukta(
                        2,
                        "Vayu",
                        "Madhuchchhandas Vaishvamitra",
                        "Gayatri",
                        vec![make_full_verse(
                            1,
                            "वायवा याहि दर्शतेमे सोमा अरंकृताः",
                            "vā́yav ā́ yāhi darśatemé sómā áraṃkṛtāḥ",
                            "Beautiful Vayu, come, for thee these Soma drops have been prepared",
                        )],
                    ),
                    make_sukta(
                        3,
                        "Ashvins",
                        "Madhuchchhandas Vaishvamitra",
                        "Gayatri",
                        vec![],
                    ),
                ],
            ),
            make_mandala(
                2,
                vec![make_sukta(
                    12,
                    "Indra",
                    "Gritsamada",
                    "Trishtubh",
                    vec![make_verse(
                        1,
                        "He who, just born, chief God of lofty spirit by power and might became the Gods' protector",
                    )],
                )],
            ),
            make_mandala(
                10,
                vec![make_sukta(
                    129,
                    "Bhavavrttam",
                    "Prajapati Parameshthi",
                    "Trishtubh",
                    vec![make_verse(
                        1,
                        "Then was not non-existent nor existent: there was no realm of air, no sky beyond it",
                    )],
                )],
            ),
        ],
    }
}

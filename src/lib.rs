//! Weighted multi-field fuzzy search over Rigveda hymn collections.
//!
//! A corpus (mandalas → suktas → verses) is flattened into one record per
//! hymn. Every record is scored against a query across six fields: deity,
//! seer, meter, and the verse text in Devanagari, IAST and English. The best
//! field decides the record's score. Records at or under the threshold come
//! back ranked best first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus.rs  │────▶│   build/     │────▶│   index.rs   │────▶│  search/    │
//! │ (Mandala,   │     │ (load,       │     │ (normalized  │     │ (score,     │
//! │  Sukta,     │     │  flatten)    │     │  fields,     │     │  rank,      │
//! │  Verse)     │     │              │     │  groups)     │     │  engine)    │
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!                                                 │                    │
//!                                                 ▼                    ▼
//!                                          ┌─────────────────────────────────┐
//!                                          │   scoring/ + fuzzy/             │
//!                                          │ (alignment, distance, ranking)  │
//!                                          └─────────────────────────────────┘
//! ```
//!
//! # Scoring at a glance
//!
//! | Step             | Rule                                                    |
//! |------------------|---------------------------------------------------------|
//! | Normalize        | lowercase, collapse whitespace, fold Latin diacritics   |
//! | Tag fields       | exact token run scores 0, else approximate substring    |
//! | Body fields      | each verse scored alone, best verse wins                |
//! | Field score      | `errors / query_len + start / distance`, clamped to 1   |
//! | Acceptance       | field score `<= threshold` (default 0.4)                |
//! | Record score     | best field score                                        |
//! | Ranking          | score asc, best-field weight desc, corpus order asc     |
//!
//! # Usage
//!
//! ```
//! use rigveda_search::{SearchEngine, testing::scenario_corpus};
//!
//! let engine = SearchEngine::new();
//! engine.initialize(&scenario_corpus()).unwrap();
//!
//! let results = engine.search("Agni");
//! assert_eq!(results[0].key().to_string(), "1.1");
//! assert_eq!(results[0].score, 0.0);
//! ```

// Module declarations
pub mod build;
pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod fuzzy;
mod index;
pub mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;
pub mod validate;

// Re-exports for public API
pub use build::{flatten_corpus, load_corpus, load_corpus_with_fallback, parse_corpus};
pub use config::{FieldWeights, SearchConfig, DEFAULT_DISTANCE, DEFAULT_THRESHOLD};
pub use corpus::{Corpus, Mandala, Sukta, Translation, Verse};
pub use error::{ConfigError, LoadError, MalformedCorpus};
pub use fuzzy::edit_distance;
pub use index::{IndexedField, IndexedText, SearchIndex};
pub use scoring::{distance, distance_with};
pub use search::{search, SearchEngine};
pub use types::{FieldMatch, Record, RecordKey, SearchField, SearchResult};
pub use utils::{normalize, normalize_with, token_spans, TokenSpan};
pub use validate::{validate_corpus, ValidationIssue, ValidationReport};

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rigveda-search command-line interface.
//!
//! Four subcommands: `search` to query a corpus, `mandala` to list one book's
//! hymns, `random` to pick a hymn, and `stats` to count and validate a corpus
//! file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rigveda-search",
    about = "Fuzzy search over Rigveda hymns by deity, seer, meter and verse text",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search hymns and print the best matches
    Search {
        /// Search query (deity, seer, meter, or words from a verse)
        query: String,

        /// Corpus JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Corpus to use when --data is missing, unreadable or empty
        #[arg(long)]
        fallback: Option<PathBuf>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// JSON file overriding weights, threshold and location settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the hymns of one mandala
    Mandala {
        /// Mandala number (1-10)
        number: u32,

        /// Corpus JSON file
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Print a randomly chosen hymn
    Random {
        /// Corpus JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show corpus statistics and validation issues
    Stats {
        /// Corpus JSON file
        #[arg(short, long)]
        data: PathBuf,
    },
}

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rigveda_search::{
    load_corpus, load_corpus_with_fallback, validate_corpus, Corpus, FieldMatch, Record,
    SearchConfig, SearchEngine, SearchResult,
};

mod cli;
use cli::display::{
    field_label, hymn_reference, hymn_title, match_label, match_percent, pad_right, row,
    section_bot, section_top, themed, CYAN, GRAY, MAGENTA, BOLD,
};
use cli::{Cli, Commands};

/// One search hit as printed by `--json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    key: String,
    score: f64,
    match_percent: u32,
    record: &'a Record,
    matches: &'a [FieldMatch],
}

impl<'a> From<&'a SearchResult> for JsonHit<'a> {
    fn from(result: &'a SearchResult) -> Self {
        Self {
            key: result.key().to_string(),
            score: result.score,
            match_percent: match_percent(result.score),
            record: &result.record,
            matches: &result.matches,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            query,
            data,
            fallback,
            limit,
            config,
            json,
        } => run_search(&query, &data, fallback.as_deref(), limit, config.as_deref(), json),
        Commands::Mandala { number, data } => run_mandala(number, &data),
        Commands::Random { data, seed } => run_random(&data, seed),
        Commands::Stats { data } => run_stats(&data),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load(data: &Path, fallback: Option<&Path>) -> Result<Corpus> {
    let corpus = match fallback {
        Some(fallback) => load_corpus_with_fallback(data, fallback)?,
        None => load_corpus(data)?,
    };
    Ok(corpus)
}

fn engine_for(corpus: &Corpus, config: SearchConfig) -> Result<SearchEngine> {
    let engine = SearchEngine::with_config(config)?;
    engine
        .initialize(corpus)
        .context("corpus cannot be indexed")?;
    Ok(engine)
}

fn run_search(
    query: &str,
    data: &Path,
    fallback: Option<&Path>,
    limit: usize,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    let corpus = load(data, fallback)?;
    let engine = engine_for(&corpus, config)?;
    let results = engine.search_limit(query, limit);

    if json {
        let hits: Vec<JsonHit<'_>> = results.iter().map(JsonHit::from).collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No hymns match \"{}\"", query);
        return Ok(());
    }

    for result in &results {
        println!("{}", themed(MAGENTA, &[BOLD], &hymn_title(&result.record)));
        println!("{}", hymn_reference(&result.record));
        let hint = result
            .best_match()
            .map(|m| format!(" (in {})", field_label(m.field)))
            .unwrap_or_default();
        println!("{}{}", match_label(result.score), themed(GRAY, &[], &hint));
        println!();
    }
    Ok(())
}

fn run_mandala(number: u32, data: &Path) -> Result<()> {
    let corpus = load(data, None)?;
    let engine = engine_for(&corpus, SearchConfig::default())?;
    let records = engine.records_in_group(number);

    if records.is_empty() {
        println!("Mandala {} has no hymns in this corpus", number);
        return Ok(());
    }

    section_top(&format!("Mandala {}", number));
    for record in &records {
        let label = themed(CYAN, &[], &format!("{:>4}", record.sukta_number));
        row(&format!(" {}  {}", label, pad_right(&hymn_title(record), 56)));
    }
    section_bot();
    Ok(())
}

fn run_random(data: &Path, seed: Option<u64>) -> Result<()> {
    let corpus = load(data, None)?;
    let engine = engine_for(&corpus, SearchConfig::default())?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match engine.random_record(&mut rng) {
        Some(record) => {
            println!("{}", themed(MAGENTA, &[BOLD], &hymn_title(&record)));
            println!("{}", hymn_reference(&record));
        }
        None => println!("Corpus has no hymns"),
    }
    Ok(())
}

fn run_stats(data: &Path) -> Result<()> {
    let corpus = load(data, None)?;
    let report = validate_corpus(&corpus);

    section_top("Corpus");
    row(&format!(" Mandalas  {:>8}", report.mandalas));
    row(&format!(" Suktas    {:>8}", report.suktas));
    row(&format!(" Verses    {:>8}", report.verses));
    section_bot();

    if report.is_valid() {
        println!("✓ No validation issues");
        return Ok(());
    }

    section_top(&format!("{} issues", report.issues.len()));
    for issue in &report.issues {
        row(&format!(" {}", issue));
    }
    section_bot();
    anyhow::bail!("corpus has {} validation issues", report.issues.len())
}

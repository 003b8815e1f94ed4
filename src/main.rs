//! # Article Metrics
//!
//! Fetches a list of web articles, extracts their body text, and scores each
//! one for sentiment and readability.
//!
//! ## Features
//!
//! - Reads `URL_ID,URL` pairs from a CSV input file
//! - Downloads each page with retries and extracts the article body
//! - Computes 13 metrics per article: sentiment scores, Fog Index, complex
//!   word share, syllables per word, personal pronouns and more
//! - Writes one report row per input URL as CSV and JSON
//!
//! ## Usage
//!
//! ```sh
//! article_metrics -i input/Input.csv -o output
//! ```
//!
//! ## Architecture
//!
//! 1. **Setup**: load config, check the output directory, load the lexicon
//! 2. **Fetching**: download and extract each article, one at a time
//! 3. **Analysis**: tokenize and score the extracted text
//! 4. **Output**: write the CSV and JSON reports

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod error;
mod inputs;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use analysis::{TextAnalyzer, lexicon};
use cli::Cli;
use config::Config;
use outputs::{json, table};
use pipeline::Pipeline;
use scrapers::article::ArticleFetcher;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("article_metrics starting up");

    let args = Cli::parse();
    debug!(input = %args.input.display(), output_dir = %args.output_dir.display(), "Parsed CLI arguments");

    let config = Config::load(args.config.as_deref())?;

    // Fail before fetching anything if results could not be written.
    ensure_writable_dir(&args.output_dir).await?;

    let lexicon = lexicon::ensure_loaded(&config.resources)?;
    info!(
        stop_words = lexicon.stop_word_count(),
        positive = lexicon.positive_count(),
        negative = lexicon.negative_count(),
        "Lexicon ready"
    );

    let entries = inputs::read_url_list(&args.input).await?;
    info!(count = entries.len(), input = %args.input.display(), "Total articles to analyze");

    let fetcher = ArticleFetcher::from_config(&config.fetch, Some(args.extracted_dir.clone()))?;
    let pipeline = Pipeline::new(fetcher, TextAnalyzer::new(lexicon), config.pacing.clone());
    let report = pipeline.run(&entries).await;

    for failure in &report.failures {
        error!(url_id = %failure.url_id, error = %failure.error, "Document omitted from report");
    }

    let csv_path = table::write_report(&report.rows, &args.output_dir).await?;
    info!(path = %csv_path.display(), rows = report.rows.len(), "Saved CSV report");

    match json::write_report(&report, &args.output_dir).await {
        Ok(path) => info!(path = %path.display(), "Saved JSON report"),
        Err(e) => error!(error = %e, "Failed to write JSON report"),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        total = report.total(),
        analyzed = report.analyzed,
        unavailable = report.unavailable,
        failed = report.failures.len(),
        "Execution complete"
    );

    Ok(())
}

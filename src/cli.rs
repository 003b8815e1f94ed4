//! Command-line interface definitions for Article Metrics.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Paths can be provided via command-line flags or environment variables;
//! everything else lives in the optional YAML config file.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Article Metrics application.
///
/// # Examples
///
/// ```sh
/// # Defaults: input/Input.csv -> output/
/// article_metrics
///
/// # Explicit paths and a config file
/// article_metrics -i urls.csv -o reports --config metrics.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// CSV file with `URL_ID` and `URL` columns
    #[arg(short, long, env = "ARTICLE_METRICS_INPUT", default_value = "input/Input.csv")]
    pub input: PathBuf,

    /// Output directory for the CSV and JSON reports
    #[arg(short, long, env = "ARTICLE_METRICS_OUTPUT_DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Directory where extracted article text is saved
    #[arg(short, long, default_value = "extracted_articles")]
    pub extracted_dir: PathBuf,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "ARTICLE_METRICS_CONFIG")]
    pub config: Option<PathBuf>,
}

//! Per-document processing loop.
//!
//! Documents are processed one at a time, in input order. Each one ends in a
//! [`DocumentOutcome`]:
//!
//! - `Analyzed`: text was fetched and scored; a full report row
//! - `Unavailable`: the source returned no text; a blank report row
//! - `Failed`: analysis raised an error; no row, the error is kept
//!
//! A run of empty fetches usually means the site is throttling us, so after
//! `max_consecutive_failures` of them in a row the loop sleeps before going on.

use crate::analysis::TextAnalyzer;
use crate::config::PacingConfig;
use crate::error::AnalysisError;
use crate::models::{ReportRow, UrlEntry};
use crate::scrapers::ArticleSource;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

/// Result of processing one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    Analyzed(ReportRow),
    Unavailable(ReportRow),
    Failed { url_id: String, error: AnalysisError },
}

/// A document whose analysis failed.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFailure {
    pub url_id: String,
    pub error: AnalysisError,
}

/// Rows in input order plus per-outcome counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub rows: Vec<ReportRow>,
    pub analyzed: usize,
    pub unavailable: usize,
    pub failures: Vec<DocumentFailure>,
}

impl RunReport {
    pub fn record(&mut self, outcome: DocumentOutcome) {
        match outcome {
            DocumentOutcome::Analyzed(row) => {
                self.analyzed += 1;
                self.rows.push(row);
            }
            DocumentOutcome::Unavailable(row) => {
                self.unavailable += 1;
                self.rows.push(row);
            }
            DocumentOutcome::Failed { url_id, error } => {
                self.failures.push(DocumentFailure { url_id, error });
            }
        }
    }

    pub fn total(&self) -> usize {
        self.analyzed + self.unavailable + self.failures.len()
    }
}

pub struct Pipeline<'a, S> {
    source: S,
    analyzer: TextAnalyzer<'a>,
    pacing: PacingConfig,
}

impl<'a, S> Pipeline<'a, S>
where
    S: ArticleSource,
{
    pub fn new(source: S, analyzer: TextAnalyzer<'a>, pacing: PacingConfig) -> Self {
        Self {
            source,
            analyzer,
            pacing,
        }
    }

    /// Fetch and score a single entry.
    #[instrument(level = "info", skip_all, fields(url_id = %entry.url_id))]
    pub async fn process(&self, entry: &UrlEntry) -> DocumentOutcome {
        let text = self.source.fetch_article_text(&entry.url).await;
        if text.trim().is_empty() {
            warn!(url = %entry.url, "No text extracted");
            return DocumentOutcome::Unavailable(ReportRow::blank(entry));
        }

        info!(chars = text.chars().count(), "Extracted text");
        match self.analyzer.analyze(&text) {
            Ok(metrics) => {
                info!(word_count = metrics.word_count, fog_index = metrics.fog_index, "Analysis completed");
                DocumentOutcome::Analyzed(ReportRow::from_metrics(entry, &metrics))
            }
            Err(error) => {
                error!(%error, "Analysis failed");
                DocumentOutcome::Failed {
                    url_id: entry.url_id.clone(),
                    error,
                }
            }
        }
    }

    /// Process every entry in order, pausing after repeated empty fetches.
    ///
    /// # Arguments
    ///
    /// * `entries` - The URL list, in report order
    ///
    /// # Returns
    ///
    /// A [`RunReport`] holding one row per analyzed or unavailable entry, in
    /// input order, plus the analysis failures that produced no row.
    #[instrument(level = "info", skip_all, fields(total = entries.len()))]
    pub async fn run(&self, entries: &[UrlEntry]) -> RunReport {
        let mut report = RunReport::default();
        let mut consecutive_failures = 0usize;

        for (index, entry) in entries.iter().enumerate() {
            info!(
                position = index + 1,
                total = entries.len(),
                url_id = %entry.url_id,
                "Processing"
            );

            let outcome = self.process(entry).await;
            if matches!(outcome, DocumentOutcome::Unavailable(_)) {
                consecutive_failures += 1;
                let limit = self.pacing.max_consecutive_failures;
                if limit > 0 && consecutive_failures >= limit {
                    warn!(
                        consecutive_failures,
                        pause_secs = self.pacing.pause_secs,
                        "Too many consecutive failures; pausing"
                    );
                    sleep(self.pacing.pause()).await;
                    consecutive_failures = 0;
                }
            } else {
                consecutive_failures = 0;
            }
            report.record(outcome);
        }

        info!(
            analyzed = report.analyzed,
            unavailable = report.unavailable,
            failed = report.failures.len(),
            "Run completed"
        );
        report
    }
}

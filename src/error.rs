//! Error types for Article Metrics.
//!
//! Each concern gets its own `thiserror` enum so callers can tell a fatal
//! resource problem apart from a per-document failure. The binary entry point
//! still collapses everything into `Box<dyn Error>`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build the lexicon store. Always fatal for a run.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A stop-word directory or sentiment word list is absent or unreadable.
    #[error("lexicon resource missing: {}: {source}", path.display())]
    ResourceMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-document analysis failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A computed metric came out as NaN or infinity.
    #[error("metric {field} is not finite ({value})")]
    NonFiniteMetric { field: &'static str, value: f64 },
}

/// Failure to fetch or parse an article page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid CSS selector: {0}")]
    Selector(String),
}

/// Failure to load configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failure to read the URL list or write the report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV writer error: {0}")]
    CsvFlush(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_missing_mentions_path() {
        let err = LexiconError::ResourceMissing {
            path: PathBuf::from("resources/StopWords"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("resources/StopWords"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_analysis_error_display() {
        let err = AnalysisError::NonFiniteMetric {
            field: "FOG INDEX",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "metric FOG INDEX is not finite (NaN)");
    }
}

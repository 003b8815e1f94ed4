//! Data models for input rows, computed metrics and report rows.
//!
//! - [`UrlEntry`]: one `(URL_ID, URL)` row of the input list
//! - [`MetricsRecord`]: the 13 readability and sentiment metrics for one article
//! - [`ReportRow`]: identifiers plus metric cells, in output column order
//!
//! Serde renames carry the exact column headings of the report, hence the
//! upper-case names with spaces.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Report columns in their fixed output order.
pub const COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// One row of the input URL list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UrlEntry {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Sentiment and readability metrics for one article.
///
/// Polarity and subjectivity carry 4 decimal places, the other ratios 2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    /// Share of complex words, as a percentage.
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`.
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// Reject records holding NaN or infinite ratios.
    pub fn ensure_finite(&self) -> Result<(), AnalysisError> {
        let ratios = [
            ("POLARITY SCORE", self.polarity_score),
            ("SUBJECTIVITY SCORE", self.subjectivity_score),
            ("AVG SENTENCE LENGTH", self.avg_sentence_length),
            ("PERCENTAGE OF COMPLEX WORDS", self.percentage_complex_words),
            ("FOG INDEX", self.fog_index),
            ("AVG NUMBER OF WORDS PER SENTENCE", self.avg_words_per_sentence),
            ("SYLLABLE PER WORD", self.syllable_per_word),
            ("AVG WORD LENGTH", self.avg_word_length),
        ];
        match ratios.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(AnalysisError::NonFiniteMetric { field, value }),
            None => Ok(()),
        }
    }
}

/// One output row. Metric cells are `None` (written blank) when no article
/// text could be fetched for the URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: Option<usize>,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: Option<usize>,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: Option<f64>,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: Option<f64>,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: Option<f64>,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: Option<f64>,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: Option<f64>,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: Option<f64>,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: Option<usize>,
    #[serde(rename = "WORD COUNT")]
    pub word_count: Option<usize>,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: Option<f64>,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: Option<usize>,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: Option<f64>,
}

impl ReportRow {
    pub fn from_metrics(entry: &UrlEntry, m: &MetricsRecord) -> Self {
        Self {
            url_id: entry.url_id.clone(),
            url: entry.url.clone(),
            positive_score: Some(m.positive_score),
            negative_score: Some(m.negative_score),
            polarity_score: Some(m.polarity_score),
            subjectivity_score: Some(m.subjectivity_score),
            avg_sentence_length: Some(m.avg_sentence_length),
            percentage_complex_words: Some(m.percentage_complex_words),
            fog_index: Some(m.fog_index),
            avg_words_per_sentence: Some(m.avg_words_per_sentence),
            complex_word_count: Some(m.complex_word_count),
            word_count: Some(m.word_count),
            syllable_per_word: Some(m.syllable_per_word),
            personal_pronouns: Some(m.personal_pronouns),
            avg_word_length: Some(m.avg_word_length),
        }
    }

    /// Identifiers only, every metric cell blank.
    pub fn blank(entry: &UrlEntry) -> Self {
        Self {
            url_id: entry.url_id.clone(),
            url: entry.url.clone(),
            positive_score: None,
            negative_score: None,
            polarity_score: None,
            subjectivity_score: None,
            avg_sentence_length: None,
            percentage_complex_words: None,
            fog_index: None,
            avg_words_per_sentence: None,
            complex_word_count: None,
            word_count: None,
            syllable_per_word: None,
            personal_pronouns: None,
            avg_word_length: None,
        }
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.word_count.is_none()
    }
}

//! Text analysis engine.
//!
//! Turns one complete article text into a [`MetricsRecord`]:
//!
//! 1. [`tokenizer`] splits the text into sentences and word tokens
//! 2. word tokens are cleaned: alphabetic only, lowercased, stop words removed
//! 3. cleaned words are scored against the [`lexicon`] sentiment lists
//! 4. [`syllables`] drives the complex-word share and the Fog Index
//! 5. [`pronouns`] runs over the original, uncleaned text
//!
//! Every ratio is guarded so an empty document yields zeros rather than NaN.

pub mod lexicon;
pub mod pronouns;
pub mod syllables;
pub mod tokenizer;

use crate::error::AnalysisError;
use crate::models::MetricsRecord;
use crate::utils::round_to;
use lexicon::LexiconStore;
use pronouns::count_personal_pronouns;
use syllables::count_syllables;
use tracing::debug;

/// Stabilizer added to denominators of the sentiment ratios.
const EPSILON: f64 = 1e-6;

/// Scores documents against a loaded [`LexiconStore`].
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer<'a> {
    lexicon: &'a LexiconStore,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(lexicon: &'a LexiconStore) -> Self {
        Self { lexicon }
    }

    /// Lowercased alphabetic tokens of `text` that are not stop words.
    pub fn cleaned_words(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
            .map(|w| w.to_lowercase())
            .filter(|w| !self.lexicon.is_stop_word(w))
            .collect()
    }

    /// Compute the metrics for one document.
    ///
    /// An empty or stop-word-only document is not an error; its ratios are 0.
    ///
    /// # Arguments
    ///
    /// * `text` - The full article text, uncleaned
    ///
    /// # Returns
    ///
    /// A [`MetricsRecord`] with polarity and subjectivity rounded to 4 places
    /// and every other ratio rounded to 2.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NonFiniteMetric`] if any ratio comes out NaN or
    /// infinite. No partially filled record is ever returned.
    pub fn analyze(&self, text: &str) -> Result<MetricsRecord, AnalysisError> {
        let tokens = tokenizer::tokenize(text);
        let cleaned = self.cleaned_words(&tokens.words);

        let positive_score = cleaned.iter().filter(|w| self.lexicon.is_positive(w)).count();
        let negative_score = cleaned.iter().filter(|w| self.lexicon.is_negative(w)).count();
        let sentiment_total = (positive_score + negative_score) as f64;

        let polarity_score =
            (positive_score as f64 - negative_score as f64) / (sentiment_total + EPSILON);
        let subjectivity_score = sentiment_total / (cleaned.len() as f64 + EPSILON);

        let word_count = cleaned.len();
        let avg_sentence_length = ratio(word_count, tokens.sentences.len());

        let syllable_counts: Vec<usize> = cleaned.iter().map(|w| count_syllables(w)).collect();
        let complex_word_count = syllable_counts.iter().filter(|&&n| n > 2).count();
        let complex_fraction = ratio(complex_word_count, word_count);
        let fog_index = 0.4 * (avg_sentence_length + complex_fraction);

        let syllable_per_word = ratio(syllable_counts.iter().sum(), word_count);
        let total_chars = cleaned.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = ratio(total_chars, word_count);

        let personal_pronouns = count_personal_pronouns(text);

        debug!(
            sentences = tokens.sentences.len(),
            tokens = tokens.words.len(),
            word_count,
            positive_score,
            negative_score,
            complex_word_count,
            "Analyzed document"
        );

        let record = MetricsRecord {
            positive_score,
            negative_score,
            polarity_score: round_to(polarity_score, 4),
            subjectivity_score: round_to(subjectivity_score, 4),
            avg_sentence_length: round_to(avg_sentence_length, 2),
            percentage_complex_words: round_to(complex_fraction * 100.0, 2),
            fog_index: round_to(fog_index, 2),
            avg_words_per_sentence: round_to(avg_sentence_length, 2),
            complex_word_count,
            word_count,
            syllable_per_word: round_to(syllable_per_word, 2),
            personal_pronouns,
            avg_word_length: round_to(avg_word_length, 2),
        };
        record.ensure_finite()?;
        Ok(record)
    }
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

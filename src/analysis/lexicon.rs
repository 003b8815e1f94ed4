//! Stop-word and sentiment word lists.
//!
//! The store is read from disk once and is immutable afterwards. Callers either
//! build one explicitly with [`LexiconStore::load`] and pass it around, or go
//! through [`ensure_loaded`], which guards the load with a one-time
//! initialization cell so concurrent first calls cannot race.

use crate::config::ResourcePaths;
use crate::error::LexiconError;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

static SHARED: OnceCell<LexiconStore> = OnceCell::new();

/// Stop words plus positive and negative sentiment words, all lowercase.
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    stop_words: HashSet<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

/// Return the process-wide store, loading it from `paths` on the first call.
///
/// Later calls return the same store and never touch the filesystem, even if
/// they pass different paths.
pub fn ensure_loaded(paths: &ResourcePaths) -> Result<&'static LexiconStore, LexiconError> {
    SHARED.get_or_try_init(|| LexiconStore::load(paths))
}

impl LexiconStore {
    /// Read the stop-word directory and both sentiment word lists.
    ///
    /// Every regular file in the stop-word directory is read in name order.
    /// Sentiment words that are also stop words are left out.
    ///
    /// # Arguments
    ///
    /// * `paths` - Locations of the stop-word directory and the two word lists
    ///
    /// # Returns
    ///
    /// A fully populated store, all words lowercased.
    ///
    /// # Errors
    ///
    /// [`LexiconError::ResourceMissing`] if the directory or either word list
    /// does not exist or cannot be read.
    #[instrument(level = "info", skip_all, fields(stop_words_dir = %paths.stop_words_dir.display()))]
    pub fn load(paths: &ResourcePaths) -> Result<Self, LexiconError> {
        let stop_words = load_stop_words(&paths.stop_words_dir)?;
        let positive = load_sentiment_words(&paths.positive_words, &stop_words)?;
        let negative = load_sentiment_words(&paths.negative_words, &stop_words)?;

        info!(
            stop_words = stop_words.len(),
            positive = positive.len(),
            negative = negative.len(),
            "Loaded lexicons"
        );
        Ok(Self {
            stop_words,
            positive,
            negative,
        })
    }

    /// Build a store from in-memory word lists, applying the same
    /// normalization and stop-word exclusion as [`LexiconStore::load`].
    #[cfg(test)]
    pub fn from_words<S, P, N>(stop_words: S, positive: P, negative: N) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let stop_words: HashSet<String> = stop_words
            .into_iter()
            .flat_map(|line| stop_word_tokens(line.as_ref()))
            .collect();
        let positive = sentiment_words(positive, &stop_words);
        let negative = sentiment_words(negative, &stop_words);
        Self {
            stop_words,
            positive,
            negative,
        }
    }

    /// `word` must already be lowercase.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    pub fn positive_count(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_count(&self) -> usize {
        self.negative.len()
    }
}

fn load_stop_words(dir: &Path) -> Result<HashSet<String>, LexiconError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| missing(dir, source))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(|source| missing(dir, source))?;
    files.retain(|p| p.is_file());
    files.sort();

    let mut stop_words = HashSet::new();
    for file in &files {
        let before = stop_words.len();
        stop_words.extend(split_lines(&read_lossy(file)?).flat_map(stop_word_tokens));
        debug!(file = %file.display(), added = stop_words.len() - before, "Read stop-word list");
    }
    Ok(stop_words)
}

fn load_sentiment_words(
    path: &Path,
    stop_words: &HashSet<String>,
) -> Result<HashSet<String>, LexiconError> {
    let content = read_lossy(path)?;
    Ok(sentiment_words(split_lines(&content), stop_words))
}

/// Lines ending in `\n`, `\r\n` or a lone `\r`. `\r\n` leaves an empty
/// piece, which every caller drops.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\n', '\r'])
}

/// Pipe-delimited, trimmed, lowercased, empties dropped.
fn stop_word_tokens(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// One word per line; `;` starts a comment line.
fn sentiment_words<I>(lines: I, stop_words: &HashSet<String>) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty() && !w.starts_with(';') && !stop_words.contains(w))
        .collect()
}

/// Read a file as UTF-8, dropping bytes that do not decode.
fn read_lossy(path: &Path) -> Result<String, LexiconError> {
    let bytes = fs::read(path).map_err(|source| missing(path, source))?;
    Ok(String::from_utf8_lossy(&bytes).replace(char::REPLACEMENT_CHARACTER, ""))
}

fn missing(path: &Path, source: std::io::Error) -> LexiconError {
    LexiconError::ResourceMissing {
        path: path.to_path_buf(),
        source,
    }
}

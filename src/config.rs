//! Runtime configuration.
//!
//! Everything has a default, so the config file is optional. When given, it
//! is YAML and may set any subset of the fields:
//!
//! ```yaml
//! resources:
//!   stop_words_dir: resources/StopWords
//!   positive_words: resources/MasterDictionary/positive-words.txt
//!   negative_words: resources/MasterDictionary/negative-words.txt
//! fetch:
//!   timeout_secs: 10
//!   max_retries: 3
//! pacing:
//!   max_consecutive_failures: 2
//!   pause_secs: 45
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub resources: ResourcePaths,
    pub fetch: FetchConfig,
    pub pacing: PacingConfig,
}

/// Where the lexicon files live.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourcePaths {
    /// Directory of pipe-delimited stop-word lists; every file is read.
    pub stop_words_dir: PathBuf,
    pub positive_words: PathBuf,
    pub negative_words: PathBuf,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            stop_words_dir: PathBuf::from("resources/StopWords"),
            positive_words: PathBuf::from("resources/MasterDictionary/positive-words.txt"),
            negative_words: PathBuf::from("resources/MasterDictionary/negative-words.txt"),
        }
    }
}

/// Page fetching and text extraction policy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Retries after the first failed attempt.
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_secs: u64,
    /// A random delay in this range precedes every page load.
    pub min_politeness_delay_ms: u64,
    pub max_politeness_delay_ms: u64,
    /// Content containers, tried in order until one yields text.
    pub content_selectors: Vec<String>,
    /// Elements whose text never counts as article content.
    pub excluded_selectors: Vec<String>,
    /// A matched container shorter than this is ignored.
    pub min_block_chars: usize,
    /// Extracted text shorter than this is treated as no text at all.
    pub min_article_chars: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36"
                .to_string(),
            timeout_secs: 10,
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_secs: 30,
            min_politeness_delay_ms: 1000,
            max_politeness_delay_ms: 2000,
            content_selectors: [
                ".td-post-content",
                ".tdb_single_content",
                ".entry-content",
                ".post-content",
                "article",
                "main",
            ]
            .map(String::from)
            .to_vec(),
            excluded_selectors: [
                "script",
                "style",
                ".code-block",
                ".wp-block-image",
                "figcaption",
                ".td-post-featured-image",
            ]
            .map(String::from)
            .to_vec(),
            min_block_chars: 100,
            min_article_chars: 50,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }
}

/// Back-off applied by the pipeline when pages keep coming back empty.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Empty fetches in a row before pausing; 0 disables pausing.
    pub max_consecutive_failures: usize,
    pub pause_secs: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            max_consecutive_failures: 2,
            pause_secs: 45,
        }
    }
}

impl PacingConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }
}

impl Config {
    /// Load from a YAML file, or return defaults when `path` is `None`.
    #[instrument(level = "info")]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            info!("No config file given; using defaults");
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.resources.stop_words_dir,
            PathBuf::from("resources/StopWords")
        );
        assert_eq!(config.pacing.max_consecutive_failures, 2);
        assert_eq!(config.pacing.pause(), Duration::from_secs(45));
        assert_eq!(config.fetch.timeout(), Duration::from_secs(10));
        assert_eq!(config.fetch.content_selectors[0], ".td-post-content");
        assert_eq!(config.fetch.content_selectors.last().unwrap(), "main");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml(
            "resources:\n  stop_words_dir: /data/stop\npacing:\n  pause_secs: 5\n",
        )
        .unwrap();
        assert_eq!(config.resources.stop_words_dir, PathBuf::from("/data/stop"));
        assert_eq!(
            config.resources.positive_words,
            PathBuf::from("resources/MasterDictionary/positive-words.txt")
        );
        assert_eq!(config.pacing.pause_secs, 5);
        assert_eq!(config.pacing.max_consecutive_failures, 2);
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(Config::from_yaml("pacing: [not, a, map]").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "fetch:\n  max_retries: 7\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.fetch.max_retries, 7);
    }

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}

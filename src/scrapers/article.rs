//! Article page fetcher.
//!
//! Downloads a page over HTTP and pulls the article body out of it. Content
//! containers are tried in a fixed order (theme-specific post bodies first,
//! then `article`, then `main`); the first selector whose matches carry enough
//! text wins. Scripts, styles, image blocks and captions inside a container
//! are skipped. When no container qualifies, the whole `body` is used.
//!
//! The result is whitespace-normalized. Pages that yield too little text are
//! reported as empty, which the pipeline turns into a blank report row.

use super::ArticleSource;
use super::retry::{FetchPage, RetryFetch};
use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::utils::{article_slug, truncate_for_log};
use itertools::Itertools;
use rand::{Rng, rng};
use scraper::{ElementRef, Html, Selector};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument, warn};

/// One plain HTTP GET per call, preceded by a short random delay.
#[derive(Debug)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl HttpPageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            min_delay_ms: config.min_politeness_delay_ms.min(config.max_politeness_delay_ms),
            max_delay_ms: config.max_politeness_delay_ms,
        })
    }
}

impl FetchPage for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let delay_ms: u64 = rng().random_range(self.min_delay_ms..=self.max_delay_ms);
        sleep(Duration::from_millis(delay_ms)).await;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Pulls readable article text out of an HTML document.
#[derive(Debug)]
pub struct ContentExtractor {
    content: Vec<Selector>,
    excluded: Vec<Selector>,
    body: Selector,
    min_block_chars: usize,
    min_article_chars: usize,
}

impl ContentExtractor {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            content: parse_selectors(&config.content_selectors)?,
            excluded: parse_selectors(&config.excluded_selectors)?,
            body: parse_selector("body")?,
            min_block_chars: config.min_block_chars,
            min_article_chars: config.min_article_chars,
        })
    }

    /// Whitespace-normalized article text, or an empty string when the page
    /// has less than the configured minimum.
    pub fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let mut article = String::new();

        for selector in &self.content {
            for element in document.select(selector) {
                let text = self.visible_text(element);
                let text = text.trim();
                if text.chars().count() > self.min_block_chars {
                    article.push_str(text);
                    article.push('\n');
                }
            }
            if !article.is_empty() {
                break;
            }
        }

        if article.trim().is_empty() {
            debug!("No content container matched; falling back to body");
            if let Some(body) = document.select(&self.body).next() {
                article = self.visible_text(body);
            }
        }

        let normalized = article.split_whitespace().join(" ");
        if normalized.chars().count() < self.min_article_chars {
            return String::new();
        }
        normalized
    }

    /// Text nodes under `root`, skipping any inside an excluded element.
    fn visible_text(&self, root: ElementRef<'_>) -> String {
        root.descendants()
            .filter_map(|node| node.value().as_text().map(|text| (node, text)))
            .filter(|(node, _)| {
                !node
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .take_while(|el| *el != root)
                    .any(|el| self.excluded.iter().any(|s| s.matches(&el)))
            })
            .map(|(_, text)| &**text)
            .join(" ")
    }
}

fn parse_selector(selector: &str) -> Result<Selector, FetchError> {
    Selector::parse(selector).map_err(|e| FetchError::Selector(format!("{selector}: {e}")))
}

fn parse_selectors(selectors: &[String]) -> Result<Vec<Selector>, FetchError> {
    selectors.iter().map(|s| parse_selector(s)).collect()
}

/// Fetches article text with retries and optionally keeps a copy on disk.
#[derive(Debug)]
pub struct ArticleFetcher<P = HttpPageFetcher> {
    pages: RetryFetch<P>,
    extractor: ContentExtractor,
    extracted_dir: Option<PathBuf>,
}

impl ArticleFetcher<HttpPageFetcher> {
    /// HTTP fetcher configured from `config`, saving text under `extracted_dir`.
    pub fn from_config(
        config: &FetchConfig,
        extracted_dir: Option<PathBuf>,
    ) -> Result<Self, FetchError> {
        Self::new(HttpPageFetcher::new(config)?, config, extracted_dir)
    }
}

impl<P> ArticleFetcher<P>
where
    P: FetchPage,
{
    pub fn new(
        pages: P,
        config: &FetchConfig,
        extracted_dir: Option<PathBuf>,
    ) -> Result<Self, FetchError> {
        let pages = RetryFetch::new(pages, config.max_retries, config.base_delay())
            .with_max_delay(config.max_delay());
        Ok(Self {
            pages,
            extractor: ContentExtractor::new(config)?,
            extracted_dir,
        })
    }
}

impl<P> ArticleSource for ArticleFetcher<P>
where
    P: FetchPage,
{
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_article_text(&self, url: &str) -> String {
        let html = match self.pages.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                error!(error = %e, "Article fetch failed");
                return String::new();
            }
        };

        let text = self.extractor.extract(&html);
        if text.is_empty() {
            warn!(bytes = html.len(), "Very little content extracted");
            return text;
        }

        info!(
            chars = text.chars().count(),
            preview = %truncate_for_log(&text, 80),
            "Extracted article text"
        );
        if let Some(dir) = &self.extracted_dir {
            if let Err(e) = save_extracted_text(dir, url, &text).await {
                warn!(error = %e, dir = %dir.display(), "Failed to save extracted text");
            }
        }
        text
    }
}

/// Write `text` to `<dir>/<slug>.txt`, where the slug is the URL's last path segment.
pub async fn save_extracted_text(dir: &Path, url: &str, text: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{}.txt", article_slug(url)));
    fs::write(&path, text).await?;
    debug!(path = %path.display(), "Saved extracted text");
    Ok(path)
}

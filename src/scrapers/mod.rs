//! Article text sources.
//!
//! Getting text for a URL happens in two layers:
//!
//! 1. **Fetching**: download the page body, retrying with backoff ([`retry`])
//! 2. **Extraction**: pick the article container out of the HTML ([`article`])
//!
//! The pipeline only sees [`ArticleSource`], so tests can substitute canned
//! text for real pages.

pub mod article;
pub mod retry;

/// Anything that can turn a URL into article text.
///
/// Failures are logged by the implementation and reported as an empty
/// string; the caller never sees an error, only the absence of text.
pub trait ArticleSource {
    async fn fetch_article_text(&self, url: &str) -> String;
}

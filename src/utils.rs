//! Utility functions for rounding, string manipulation, and file system operations.
//!
//! - Decimal rounding of report metrics
//! - String truncation for log previews
//! - Deriving a file-friendly article id from its URL
//! - File system validation for output directories

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};
use url::Url;

/// Round `value` to `places` decimal places.
///
/// Rounds the exact binary value half-to-even, so `round_to(2.675, 2)` is
/// `2.67` because the stored double sits just below the midpoint.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes on a character boundary, with
/// an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log("a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Name for the saved article text: the last `/`-separated piece of `url`
/// after trailing slashes are dropped.
///
/// A query string or fragment stays attached to the last path segment, so
/// `…/b?x=1` becomes `b?x=1`. When the path is empty the host is used, and a
/// string that does not parse as a URL is split on `/` as-is.
///
/// # Arguments
///
/// * `url` - The article URL from the input list
///
/// # Returns
///
/// A non-empty file stem.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(article_slug("https://x.com/news/rising-it-cities/"), "rising-it-cities");
/// ```
pub fn article_slug(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return raw_slug(url);
    };
    let base = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .or_else(|| parsed.host_str());
    let Some(base) = base else {
        return raw_slug(url);
    };

    let mut slug = base.to_string();
    if let Some(query) = parsed.query() {
        slug.push('?');
        slug.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        slug.push('#');
        slug.push_str(fragment);
    }
    slug
}

fn raw_slug(url: &str) -> String {
    let slug = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    if slug.is_empty() {
        "article".to_string()
    } else {
        slug.to_string()
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe = path.join(".article_metrics_probe");
    fs::write(&probe, b"").await?;
    if let Err(e) = fs::remove_file(&probe).await {
        warn!(probe = %probe.display(), error = %e, "Could not remove probe file");
    }
    info!("Output directory is writable");
    Ok(())
}

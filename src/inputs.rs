//! Reading the list of articles to analyze.
//!
//! The input is a CSV file with a header row containing `URL_ID` and `URL`;
//! other columns are ignored and the column order does not matter.

use crate::error::ReportError;
use crate::models::UrlEntry;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Read every `(URL_ID, URL)` row from the CSV file at `path`.
///
/// Rows with an empty URL are skipped with a warning.
///
/// # Arguments
///
/// * `path` - CSV file with a `URL_ID,URL` header
///
/// # Returns
///
/// The entries in file order, or an error if the file cannot be read or a
/// row does not deserialize.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_url_list(path: &Path) -> Result<Vec<UrlEntry>, ReportError> {
    let raw = fs::read(path).await?;
    let entries = parse_url_list(&raw)?;
    info!(count = entries.len(), "Loaded URL list");
    Ok(entries)
}

pub fn parse_url_list(raw: &[u8]) -> Result<Vec<UrlEntry>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(raw);

    let mut entries = Vec::new();
    for (line, row) in reader.deserialize::<UrlEntry>().enumerate() {
        let entry = row?;
        if entry.url.is_empty() {
            warn!(row = line + 1, url_id = %entry.url_id, "Skipping row without URL");
            continue;
        }
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_list() {
        let raw = b"URL_ID,URL\nblackassign0001,https://example.com/a/\n 42 , https://example.com/b \n";
        let entries = parse_url_list(raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url_id, "blackassign0001");
        assert_eq!(entries[1].url_id, "42");
        assert_eq!(entries[1].url, "https://example.com/b");
    }

    #[test]
    fn test_extra_columns_and_order() {
        let raw = b"URL,notes,URL_ID\nhttps://example.com/x,first,id-x\n";
        let entries = parse_url_list(raw).unwrap();
        assert_eq!(
            entries,
            vec![UrlEntry {
                url_id: "id-x".to_string(),
                url: "https://example.com/x".to_string(),
            }]
        );
    }

    #[test]
    fn test_rows_without_url_are_skipped() {
        let raw = b"URL_ID,URL\na,\nb,https://example.com/b\n";
        let entries = parse_url_list(raw).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url_id, "b");
    }

    #[test]
    fn test_missing_column_is_error() {
        let raw = b"ID,LINK\na,https://example.com\n";
        assert!(matches!(parse_url_list(raw), Err(ReportError::Csv(_))));
    }

    #[tokio::test]
    async fn test_read_url_list_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Input.csv");
        std::fs::write(&path, "URL_ID,URL\nid1,https://example.com/one\n").unwrap();
        let entries = read_url_list(&path).await.unwrap();
        assert_eq!(entries.len(), 1);
    }
}

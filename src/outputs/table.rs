//! CSV report output.
//!
//! The header row is written explicitly from [`COLUMNS`] so even an empty
//! report carries the full column set. Blank rows keep their identifiers and
//! leave all 13 metric cells empty.

use super::REPORT_STEM;
use crate::error::ReportError;
use crate::models::{COLUMNS, ReportRow};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `rows` to CSV bytes, header first.
pub fn render_csv(rows: &[ReportRow]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| ReportError::CsvFlush(e.to_string()))
}

/// Write the CSV report into `output_dir` and return its path.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display(), rows = rows.len()))]
pub async fn write_report(rows: &[ReportRow], output_dir: &Path) -> Result<PathBuf, ReportError> {
    let path = output_dir.join(format!("{REPORT_STEM}.csv"));
    let bytes = render_csv(rows)?;
    fs::write(&path, bytes).await?;
    info!(path = %path.display(), "Wrote CSV report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetricsRecord, UrlEntry};

    fn entry(id: &str) -> UrlEntry {
        UrlEntry {
            url_id: id.to_string(),
            url: format!("https://example.com/{id}"),
        }
    }

    fn metrics() -> MetricsRecord {
        MetricsRecord {
            positive_score: 2,
            negative_score: 1,
            polarity_score: 0.3333,
            subjectivity_score: 0.5,
            avg_sentence_length: 3.0,
            percentage_complex_words: 0.0,
            fog_index: 1.2,
            avg_words_per_sentence: 3.0,
            complex_word_count: 0,
            word_count: 6,
            syllable_per_word: 1.33,
            personal_pronouns: 0,
            avg_word_length: 4.5,
        }
    }

    fn render(rows: &[ReportRow]) -> String {
        String::from_utf8(render_csv(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_report_has_header() {
        let out = render(&[]);
        assert_eq!(out.trim_end(), COLUMNS.join(","));
    }

    #[test]
    fn test_blank_row_has_empty_metric_cells() {
        let out = render(&[ReportRow::blank(&entry("a1"))]);
        let line = out.lines().nth(1).unwrap();
        assert_eq!(line, format!("a1,https://example.com/a1{}", ",".repeat(13)));
    }

    #[test]
    fn test_metrics_row_values_in_column_order() {
        let out = render(&[ReportRow::from_metrics(&entry("a2"), &metrics())]);
        let line = out.lines().nth(1).unwrap();
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], "a2");
        assert_eq!(cells[2], "2");
        assert_eq!(cells[4], "0.3333");
        assert_eq!(cells[11], "6");
        assert_eq!(cells[14], "4.5");
    }

    #[tokio::test]
    async fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            ReportRow::from_metrics(&entry("a"), &metrics()),
            ReportRow::blank(&entry("b")),
        ];
        let path = write_report(&rows, dir.path()).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "Output_Data_Structure.csv");
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}

//! JSON report output.
//!
//! The JSON report mirrors the CSV rows and adds when the run happened and
//! how many documents ended up in each outcome:
//!
//! ```text
//! {
//!   "generated_at": "2025-05-06T14:30:00+00:00",
//!   "analyzed": 98, "unavailable": 2, "failed": 0,
//!   "rows": [{ "URL_ID": "...", "URL": "...", "POSITIVE SCORE": 12, ... }]
//! }
//! ```

use super::REPORT_STEM;
use crate::error::ReportError;
use crate::models::ReportRow;
use crate::pipeline::RunReport;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    analyzed: usize,
    unavailable: usize,
    failed: usize,
    rows: &'a [ReportRow],
}

/// Serialize a [`RunReport`] to pretty-printed JSON.
pub fn render_json(report: &RunReport) -> Result<String, ReportError> {
    let doc = JsonReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        analyzed: report.analyzed,
        unavailable: report.unavailable,
        failed: report.failures.len(),
        rows: &report.rows,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Write the JSON report into `output_dir` and return its path.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn write_report(report: &RunReport, output_dir: &Path) -> Result<PathBuf, ReportError> {
    let json = render_json(report)?;

    info!(output_dir = %output_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(output_dir = %output_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = output_dir.join(format!("{REPORT_STEM}.json"));
    info!(path = %path.display(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON report");

    Ok(path)
}

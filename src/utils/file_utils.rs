use crate::error::ScanError;
use crate::models::Report;
use crate::services::scoring::ReportVariant;
use crate::utils::url_utils::hostname_slug;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// `report-<host-with-dashes>-<epoch ms>[-lite].json`
pub fn report_filename(url: &str, timestamp_ms: i64, variant: ReportVariant) -> String {
    format!(
        "report-{}-{}{}.json",
        hostname_slug(url),
        timestamp_ms,
        variant.file_suffix()
    )
}

pub async fn save_report(dir: &Path, url: &str, report: &Report) -> Result<PathBuf, ScanError> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(report_filename(
        url,
        Utc::now().timestamp_millis(),
        report.variant,
    ));
    let body = serde_json::to_vec_pretty(report)?;
    fs::write(&path, body).await?;
    Ok(path)
}

/// Writes captured page markup for the prepare-scan endpoint.
pub async fn save_html(dir: &Path, html: &str) -> Result<PathBuf, ScanError> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(format!("scan-{}.html", Uuid::new_v4()));
    fs::write(&path, html).await?;
    Ok(path)
}

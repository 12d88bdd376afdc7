use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a page, running Lighthouse or persisting a
/// report. Scoring itself never fails.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("All methods failed: {}", .0.join("; "))]
    AllBackendsFailed(Vec<String>),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Audit score is 0, indicating a failed audit")]
    ZeroScore,

    #[error("Lighthouse failed with code {}: {stderr}", code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    Lighthouse { code: Option<i32>, stderr: String },

    #[error("Lighthouse runner script not found: {}", .0.display())]
    RunnerMissing(PathBuf),

    #[error("Lighthouse report not created: {}", .0.display())]
    ReportMissing(PathBuf),

    #[error("Lighthouse audit timed out after {0} seconds")]
    LighthouseTimeout(u64),

    #[error("Invalid value for {key}: {value:?}")]
    Config { key: &'static str, value: String },

    #[error("Scanner is shutting down")]
    Unavailable,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    /// Short machine-readable tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::Navigation(_) | ScanError::HttpStatus { .. } => "navigation",
            ScanError::Browser(_) => "browser",
            ScanError::HttpClient(_) => "http_client",
            ScanError::AllBackendsFailed(_) => "all_backends_failed",
            ScanError::UnknownMethod(_) => "unknown_method",
            ScanError::ZeroScore => "zero_score",
            ScanError::Lighthouse { .. }
            | ScanError::RunnerMissing(_)
            | ScanError::ReportMissing(_)
            | ScanError::LighthouseTimeout(_) => "lighthouse",
            ScanError::Config { .. } => "config",
            ScanError::Unavailable => "unavailable",
            ScanError::Io(_) => "io",
            ScanError::Json(_) => "json",
        }
    }
}

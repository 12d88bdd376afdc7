use crate::models::lighthouse::Report;
use serde::Serialize;

// Response for the audit handler
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    pub success: bool,
    pub report_path: Option<String>,
    pub report: Option<Report>,
    pub is_lite_version: bool,
    pub version: String,
    pub url: String,
    pub device: String,
    pub strategy: String,
    pub attempt_number: u32,
    pub message: String,
    pub error: Option<String>,
    pub error_code: Option<String>,
}

// Response for the prepare-scan handler
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub final_url: Option<String>,
    pub html_file: Option<String>,
    pub method_used: Option<String>,
    pub error: Option<String>,
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

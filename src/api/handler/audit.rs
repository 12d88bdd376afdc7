use crate::error::ScanError;
use crate::models::{AppState, AuditRequest, AuditResponse};
use crate::services::ReportVariant;
use axum::{extract::State, http::StatusCode, Json};
use log::error;
use std::sync::Arc;

const AUDIT_FAILED: &str = "AUDIT_FAILED";

pub async fn audit_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuditRequest>,
) -> (StatusCode, Json<AuditResponse>) {
    let variant = ReportVariant::from_lite_flag(request.is_lite_version);

    let _permit = match state.permits.acquire().await {
        Ok(permit) => permit,
        Err(_) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(failure(&request, variant, &ScanError::Unavailable)),
            )
        }
    };

    match state.scanner.audit(&request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(AuditResponse {
                success: true,
                report_path: Some(outcome.report_path.to_string_lossy().to_string()),
                report: Some(outcome.report),
                is_lite_version: request.is_lite_version,
                version: variant.label().to_string(),
                url: request.url,
                device: request.device,
                strategy: outcome.backend.to_string(),
                attempt_number: 1,
                message: format!(
                    "{} audit completed successfully using {} strategy",
                    variant.label(),
                    outcome.backend
                ),
                error: None,
                error_code: None,
            }),
        ),
        Err(e) => {
            error!("❌ Audit failed for {} [{}]: {}", request.url, e.kind(), e);
            // Failures still answer 200; callers branch on `success`.
            (StatusCode::OK, Json(failure(&request, variant, &e)))
        }
    }
}

fn failure(request: &AuditRequest, variant: ReportVariant, err: &ScanError) -> AuditResponse {
    AuditResponse {
        success: false,
        report_path: None,
        report: None,
        is_lite_version: request.is_lite_version,
        version: variant.label().to_string(),
        url: request.url.clone(),
        device: request.device.clone(),
        strategy: "auto".to_string(),
        attempt_number: 1,
        message: format!("Audit failed: {}", err),
        error: Some(err.to_string()),
        error_code: Some(AUDIT_FAILED.to_string()),
    }
}

use crate::models::AppState;
use crate::models::AuditRequest;
use crate::utils::normalize_url;
use axum::{extract::State, http::StatusCode, Json};
use log::error;
use serde_json::{json, Value};
use std::sync::Arc;

/// Alternative scoring path: real Lighthouse via the Node runner. The
/// runner's report is returned as-is.
pub async fn run_lighthouse_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuditRequest>,
) -> (StatusCode, Json<Value>) {
    let _permit = match state.permits.acquire().await {
        Ok(permit) => permit,
        Err(e) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"success": false, "error": e.to_string()})),
            )
        }
    };

    let url = normalize_url(&request.url);
    match state
        .lighthouse
        .run(&url, &request.device, request.is_lite_version)
        .await
    {
        Ok(report) => (StatusCode::OK, Json(report)),
        Err(e) => {
            error!("❌ Lighthouse failed for {}: {}", url, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "success": false,
                    "error": e.to_string(),
                    "errorCode": "LIGHTHOUSE_FAILED",
                })),
            )
        }
    }
}

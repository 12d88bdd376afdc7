use crate::error::ScanError;
use crate::models::{AppState, DeviceProfile, ScanRequest, ScanResponse};
use crate::utils::{normalize_url, save_html};
use axum::{extract::State, http::StatusCode, Json};
use log::{info, warn};
use std::sync::Arc;

/// Loads a page through the requested backend and hands back the captured
/// HTML on disk, for callers that run their own audit tooling on it.
pub async fn prepare_scan_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScanRequest>,
) -> (StatusCode, Json<ScanResponse>) {
    let chain = match state.scanner.backends().select(&request.method) {
        Ok(chain) => chain,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ScanResponse {
                    error: Some(e.to_string()),
                    ..Default::default()
                }),
            )
        }
    };

    let _permit = match state.permits.acquire().await {
        Ok(permit) => permit,
        Err(_) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ScanResponse {
                    error: Some(ScanError::Unavailable.to_string()),
                    ..Default::default()
                }),
            )
        }
    };

    let url = normalize_url(&request.url);
    let device = DeviceProfile::for_device(&request.device);

    let result = async {
        let page = chain.load(&url, device).await?;
        let html_file = save_html(&state.settings.temp_dir, &page.html).await?;
        Ok::<_, ScanError>((page, html_file))
    }
    .await;

    match result {
        Ok((page, html_file)) => {
            info!("Prepared {} with {}", page.final_url, page.backend);
            (
                StatusCode::OK,
                Json(ScanResponse {
                    success: true,
                    final_url: Some(page.final_url),
                    html_file: Some(html_file.to_string_lossy().to_string()),
                    method_used: Some(page.backend.to_string()),
                    error: None,
                    status_code: page.status,
                }),
            )
        }
        Err(e) => {
            warn!("Prepare scan failed for {}: {}", url, e);
            let status_code = match &e {
                ScanError::HttpStatus { status, .. } => Some(*status),
                _ => None,
            };
            (
                StatusCode::OK,
                Json(ScanResponse {
                    error: Some(e.to_string()),
                    status_code,
                    ..Default::default()
                }),
            )
        }
    }
}

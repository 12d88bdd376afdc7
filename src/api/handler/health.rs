use crate::models::HealthResponse;
use axum::Json;

// GET and HEAD
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "silverscan",
    })
}

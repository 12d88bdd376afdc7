// src/api/mod.rs

pub mod handler;
pub mod lighthouse;

pub use handler::{audit_handler, health_handler, prepare_scan_handler};
pub use lighthouse::run_lighthouse_handler;

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/audit", post(audit_handler))
        .route("/audit/lighthouse", post(run_lighthouse_handler))
        .route("/scan/prepare", post(prepare_scan_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

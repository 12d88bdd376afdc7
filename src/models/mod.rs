// src/models/mod.rs

pub mod api;
pub mod app;
pub mod lighthouse;
pub mod scan;

pub use api::{AuditRequest, AuditResponse, HealthResponse, ScanRequest, ScanResponse};
pub use app::AppState;
pub use lighthouse::{AuditDefinition, AuditDetails, AuditResult, Category, Report};
pub use scan::{DeviceProfile, LoadedPage, PageSignals, Tally};

pub mod params;
pub mod response;

pub use params::{AuditRequest, ScanRequest};
pub use response::{AuditResponse, HealthResponse, ScanResponse};

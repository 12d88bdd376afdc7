pub mod audit;
pub mod health;
pub mod prepare;

pub use audit::audit_handler;
pub use health::health_handler;
pub use prepare::prepare_scan_handler;

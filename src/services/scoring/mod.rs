// src/services/scoring/mod.rs

pub mod aggregate;
pub mod catalogue;
pub mod report;

pub use aggregate::score;
pub use catalogue::{ReportVariant, FULL_CATALOGUE, LITE_CATALOGUE};
pub use report::{build_report, build_report_at, LIGHTHOUSE_VERSION};

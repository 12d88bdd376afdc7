pub mod browser;
pub mod lighthouse;
pub mod probes;
pub mod scan;
pub mod scoring;

pub use lighthouse::LighthouseRunner;
pub use scan::{assemble_report, ScanOutcome, ScanService};
pub use scoring::{build_report, score, ReportVariant};

use crate::error::ScanError;
use crate::models::{AuditRequest, DeviceProfile, LoadedPage, Report};
use crate::services::browser::BackendChain;
use crate::services::probes::run_probes;
use crate::services::scoring::{build_report, ReportVariant};
use crate::utils::{normalize_url, save_report};
use log::info;
use std::path::PathBuf;

/// A finished, persisted scan.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: Report,
    pub score: f64,
    pub report_path: PathBuf,
    pub backend: &'static str,
}

/// Load, probe, score and persist.
pub struct ScanService {
    backends: BackendChain,
    report_dir: PathBuf,
}

impl ScanService {
    pub fn new(backends: BackendChain, report_dir: PathBuf) -> Self {
        Self {
            backends,
            report_dir,
        }
    }

    pub fn backends(&self) -> &BackendChain {
        &self.backends
    }

    pub async fn audit(&self, request: &AuditRequest) -> Result<ScanOutcome, ScanError> {
        let url = normalize_url(&request.url);
        let variant = ReportVariant::from_lite_flag(request.is_lite_version);
        let device = DeviceProfile::for_device(&request.device);

        info!(
            "=== Starting {} audit for {} ({}, {}x{}) ===",
            variant.label(),
            url,
            device.name,
            device.width,
            device.height
        );

        let page = self.backends.load(&url, device).await?;
        let report = assemble_report(&page, variant);
        let score = report.score();

        // Policy: a zero score almost always means the page never really
        // loaded, so it is surfaced as a failure rather than a result.
        if score == 0.0 {
            return Err(ScanError::ZeroScore);
        }

        let report_path = save_report(&self.report_dir, &url, &report).await?;
        info!("📊 Score: {}%", score);
        info!("📄 Report saved to: {}", report_path.display());

        Ok(ScanOutcome {
            report,
            score,
            report_path,
            backend: page.backend,
        })
    }
}

/// Runs the probes for `variant` and wraps them into a report.
pub fn assemble_report(page: &LoadedPage, variant: ReportVariant) -> Report {
    let audits = run_probes(page, variant);
    build_report(variant, &page.requested_url, &page.final_url, audits)
}

use crate::config::Settings;
use crate::error::ScanError;
use crate::services::browser::BackendChain;
use crate::services::lighthouse::LighthouseRunner;
use crate::services::scan::ScanService;
use tokio::sync::Semaphore;

pub struct AppState {
    pub settings: Settings,
    pub scanner: ScanService,
    pub lighthouse: LighthouseRunner,
    // bounds the number of scans running at once
    pub permits: Semaphore,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, ScanError> {
        let backends = BackendChain::from_settings(&settings)?;
        Ok(Self::with_backends(settings, backends))
    }

    pub fn with_backends(settings: Settings, backends: BackendChain) -> Self {
        Self {
            scanner: ScanService::new(backends, settings.temp_dir.clone()),
            lighthouse: LighthouseRunner::from_settings(&settings),
            permits: Semaphore::new(settings.limit_concurrency),
            settings,
        }
    }
}

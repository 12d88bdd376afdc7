//! Page acquisition. Everything that knows how a page gets loaded lives
//! behind [`PageBackend`]; the scoring side only ever sees a [`LoadedPage`].

pub mod chromium;
pub mod http;
mod scripts;

pub use chromium::ChromiumBackend;
pub use http::HttpBackend;

use crate::config::Settings;
use crate::error::ScanError;
use crate::models::{DeviceProfile, LoadedPage};
use futures::future::BoxFuture;
use log::{info, warn};
use std::sync::Arc;

pub trait PageBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Loads `url` emulating `device`, or fails with a navigation error.
    fn load<'a>(
        &'a self,
        url: &'a str,
        device: &'a DeviceProfile,
    ) -> BoxFuture<'a, Result<LoadedPage, ScanError>>;
}

/// Ordered list of backends, tried until one loads the page.
#[derive(Clone)]
pub struct BackendChain {
    backends: Vec<Arc<dyn PageBackend>>,
}

impl BackendChain {
    pub fn new(backends: Vec<Arc<dyn PageBackend>>) -> Self {
        Self { backends }
    }

    /// Headless Chromium first, plain HTTP as the fallback.
    pub fn from_settings(settings: &Settings) -> Result<Self, ScanError> {
        Ok(Self::new(vec![
            Arc::new(ChromiumBackend::from_settings(settings)),
            Arc::new(HttpBackend::new(settings.navigation_timeout)?),
        ]))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Narrows the chain to the backend a caller asked for. `auto` keeps the
    /// whole chain; older client method names are accepted as aliases.
    pub fn select(&self, method: &str) -> Result<BackendChain, ScanError> {
        let wanted = match method.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => return Ok(self.clone()),
            "chromium" | "undetected-chrome" | "playwright" => chromium::NAME,
            "http" | "cloudscraper" => http::NAME,
            _ => return Err(ScanError::UnknownMethod(method.to_string())),
        };

        let backends: Vec<_> = self
            .backends
            .iter()
            .filter(|b| b.name() == wanted)
            .cloned()
            .collect();
        if backends.is_empty() {
            return Err(ScanError::UnknownMethod(method.to_string()));
        }
        Ok(Self::new(backends))
    }

    pub async fn load(&self, url: &str, device: &DeviceProfile) -> Result<LoadedPage, ScanError> {
        let mut failures = Vec::new();
        for backend in &self.backends {
            info!("Loading {} with {} ({})", url, backend.name(), device.name);
            match backend.load(url, device).await {
                Ok(page) => return Ok(page),
                Err(e) => {
                    warn!("{} could not load {}: {}", backend.name(), url, e);
                    failures.push(format!("{}: {}", backend.name(), e));
                }
            }
        }
        Err(ScanError::AllBackendsFailed(failures))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that serves canned HTML or a canned failure.
    pub struct StaticBackend {
        pub name: &'static str,
        pub html: Option<String>,
        pub final_url: Option<String>,
        pub calls: AtomicUsize,
    }

    impl StaticBackend {
        pub fn serving(name: &'static str, html: &str) -> Self {
            Self {
                name,
                html: Some(html.to_string()),
                final_url: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(name: &'static str) -> Self {
            Self {
                name,
                html: None,
                final_url: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PageBackend for StaticBackend {
        fn name(&self) -> &'static str {
            self.name
        }

        fn load<'a>(
            &'a self,
            url: &'a str,
            _device: &'a DeviceProfile,
        ) -> BoxFuture<'a, Result<LoadedPage, ScanError>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                match &self.html {
                    Some(html) => Ok(LoadedPage {
                        requested_url: url.to_string(),
                        final_url: self.final_url.clone().unwrap_or_else(|| url.to_string()),
                        html: html.clone(),
                        status: Some(200),
                        signals: None,
                        backend: self.name,
                    }),
                    None => Err(ScanError::Navigation("connection refused".to_string())),
                }
            })
        }
    }
}

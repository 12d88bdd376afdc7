use crate::error::ScanError;
use crate::models::{DeviceProfile, LoadedPage};
use crate::services::browser::PageBackend;
use futures::future::BoxFuture;
use log::info;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

pub const NAME: &str = "http";

// A 403 with at least this much body is usually a soft block that still
// served the page.
const MIN_FORBIDDEN_BODY: usize = 1000;

/// Plain HTTP fetch. No script execution, so no rendered signals.
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    pub fn new(timeout: Duration) -> Result<Self, ScanError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScanError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: &str, device: &DeviceProfile) -> Result<LoadedPage, ScanError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, device.user_agent)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| ScanError::Navigation(e.to_string()))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| ScanError::Navigation(format!("Failed to read body: {}", e)))?;

        check_status(status, html.len())?;
        info!("✅ {} fetched {} ({} chars)", NAME, final_url, html.len());

        Ok(LoadedPage {
            requested_url: url.to_string(),
            final_url,
            html,
            status: Some(status),
            signals: None,
            backend: NAME,
        })
    }
}

impl PageBackend for HttpBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn load<'a>(
        &'a self,
        url: &'a str,
        device: &'a DeviceProfile,
    ) -> BoxFuture<'a, Result<LoadedPage, ScanError>> {
        Box::pin(self.fetch(url, device))
    }
}

pub fn check_status(status: u16, body_len: usize) -> Result<(), ScanError> {
    match status {
        s if s < 400 => Ok(()),
        403 if body_len >= MIN_FORBIDDEN_BODY => Ok(()),
        403 => Err(ScanError::HttpStatus {
            status,
            message: "Insufficient content".to_string(),
        }),
        _ => Err(ScanError::HttpStatus {
            status,
            message: "Failed to load page".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_navigation_timeout() {
        let backend = HttpBackend::new(Duration::from_secs(5)).unwrap();
        assert_eq!(backend.name(), NAME);
    }

    #[test]
    fn success_and_redirect_statuses_pass() {
        assert!(check_status(200, 0).is_ok());
        assert!(check_status(304, 0).is_ok());
    }

    #[test]
    fn forbidden_with_content_is_accepted() {
        assert!(check_status(403, 5_000).is_ok());
        let err = check_status(403, 200).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 403: Insufficient content");
    }

    #[test]
    fn other_errors_fail() {
        let err = check_status(500, 10_000).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Failed to load page");
        assert!(check_status(404, 0).is_err());
    }
}

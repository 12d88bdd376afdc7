use crate::config::Settings;
use crate::error::ScanError;
use crate::models::{DeviceProfile, LoadedPage, PageSignals};
use crate::services::browser::scripts::{GEOLOCATION_HOOK, PAGE_SIGNALS};
use crate::services::browser::PageBackend;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::AddScriptToEvaluateOnNewDocumentParams;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::Page;
use futures::future::BoxFuture;
use futures::StreamExt;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

pub const NAME: &str = "chromium";

/// Headless Chromium driven over CDP. One browser, with its own profile
/// directory under `profile_root`, per scan.
pub struct ChromiumBackend {
    executable: Option<String>,
    profile_root: PathBuf,
    navigation_timeout: Duration,
    settle_delay: Duration,
}

impl ChromiumBackend {
    pub fn new(
        executable: Option<String>,
        profile_root: PathBuf,
        navigation_timeout: Duration,
        settle_delay: Duration,
    ) -> Self {
        Self {
            executable,
            profile_root,
            navigation_timeout,
            settle_delay,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.chrome_executable.clone(),
            settings.temp_dir.clone(),
            settings.navigation_timeout,
            settings.settle_delay,
        )
    }

    fn executable(&self) -> Option<String> {
        self.executable.clone().or_else(find_chrome_executable)
    }

    // Concurrent launches on a shared profile hand off to the first process.
    fn profile_dir(&self) -> PathBuf {
        self.profile_root.join(format!("chromium-profile-{}", Uuid::new_v4()))
    }

    async fn scan(&self, url: &str, device: &DeviceProfile) -> Result<LoadedPage, ScanError> {
        let exe = self.executable().ok_or_else(|| {
            ScanError::Browser(
                "No Chromium executable found. Set CHROME_EXECUTABLE to its path.".to_string(),
            )
        })?;
        let profile = self.profile_dir();
        let config = build_config(&exe, device, &profile)?;

        let launched = Browser::launch(config).await;
        let (mut browser, mut handler) = match launched {
            Ok(pair) => pair,
            Err(e) => {
                remove_profile(&profile).await;
                return Err(ScanError::Browser(format!("Failed to launch {}: {}", exe, e)));
            }
        };

        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler error: {}", e);
                }
            }
        });

        let result = self.capture(&browser, url).await;

        if let Err(e) = browser.close().await {
            warn!("Browser close error (non-fatal): {}", e);
        }
        if let Err(e) = browser.wait().await {
            debug!("Browser wait error: {}", e);
        }
        handle.abort();
        remove_profile(&profile).await;

        let (final_url, html, signals) = result?;
        info!("✅ {} loaded {} ({} chars)", NAME, final_url, html.len());
        Ok(LoadedPage {
            requested_url: url.to_string(),
            final_url,
            html,
            status: None,
            signals,
            backend: NAME,
        })
    }

    async fn capture(
        &self,
        browser: &Browser,
        url: &str,
    ) -> Result<(String, String, Option<PageSignals>), ScanError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScanError::Browser(format!("Failed to open page: {}", e)))?;

        page.evaluate_on_new_document(AddScriptToEvaluateOnNewDocumentParams::new(
            GEOLOCATION_HOOK,
        ))
        .await
        .map_err(|e| ScanError::Browser(format!("Failed to install page hooks: {}", e)))?;

        match tokio::time::timeout(self.navigation_timeout, page.goto(url)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => return Err(ScanError::Navigation(e.to_string())),
            Err(_) => {
                return Err(ScanError::Navigation(format!(
                    "timed out after {}s",
                    self.navigation_timeout.as_secs()
                )))
            }
        }

        // let late scripts and lazy content settle
        tokio::time::sleep(self.settle_delay).await;

        let html = page
            .content()
            .await
            .map_err(|e| ScanError::Browser(format!("Failed to get page content: {}", e)))?;
        let final_url = page
            .url()
            .await
            .map_err(|e| ScanError::Browser(e.to_string()))?
            .unwrap_or_else(|| url.to_string());
        let signals = measure(&page).await;

        if let Err(e) = page.close().await {
            debug!("Page close error: {}", e);
        }
        Ok((final_url, html, signals))
    }
}

async fn remove_profile(dir: &Path) {
    if let Err(e) = tokio::fs::remove_dir_all(dir).await {
        debug!("Profile cleanup skipped for {}: {}", dir.display(), e);
    }
}

// A page that blocks script evaluation still gets its markup audited.
async fn measure(page: &Page) -> Option<PageSignals> {
    match page.evaluate(PAGE_SIGNALS).await {
        Ok(value) => match value.into_value::<PageSignals>() {
            Ok(signals) => Some(signals),
            Err(e) => {
                warn!("Unexpected page signal payload: {}", e);
                None
            }
        },
        Err(e) => {
            warn!("Page signal script failed: {}", e);
            None
        }
    }
}

impl PageBackend for ChromiumBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn load<'a>(
        &'a self,
        url: &'a str,
        device: &'a DeviceProfile,
    ) -> BoxFuture<'a, Result<LoadedPage, ScanError>> {
        Box::pin(self.scan(url, device))
    }
}

/// Headless config emulating `device`, with the automation fingerprints
/// switched off.
pub fn build_config(
    exe: &str,
    device: &DeviceProfile,
    profile: &Path,
) -> Result<BrowserConfig, ScanError> {
    BrowserConfig::builder()
        .chrome_executable(exe)
        .user_data_dir(profile)
        .viewport(Viewport {
            width: device.width,
            height: device.height,
            device_scale_factor: Some(device.device_scale_factor),
            emulating_mobile: device.is_mobile,
            is_landscape: device.width > device.height,
            has_touch: device.has_touch,
        })
        .window_size(device.width, device.height)
        .arg(format!("--user-agent={}", device.user_agent))
        .arg("--disable-blink-features=AutomationControlled")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--disable-setuid-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--disable-extensions")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--mute-audio")
        .build()
        .map_err(|e| ScanError::Browser(format!("Failed to build browser config: {}", e)))
}

/// Finds a Chromium-family browser on PATH or in the usual install locations.
pub fn find_chrome_executable() -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "chromium",
        "chromium-browser",
        "google-chrome",
        "google-chrome-stable",
        "chrome",
    ];

    if let Ok(path_var) = std::env::var("PATH") {
        for dir in std::env::split_paths(&path_var) {
            for exe in CANDIDATES {
                let full = dir.join(exe);
                if full.exists() {
                    return Some(full.to_string_lossy().to_string());
                }
            }
        }
    }

    [
        "/usr/bin/chromium",
        "/usr/bin/chromium-browser",
        "/usr/bin/google-chrome",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
    ]
    .into_iter()
    .find(|p| Path::new(p).exists())
    .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scan::device::{DESKTOP, MOBILE};

    fn backend(root: &Path) -> ChromiumBackend {
        ChromiumBackend::new(
            Some("/nonexistent/chromium-for-tests".to_string()),
            root.to_path_buf(),
            Duration::from_secs(1),
            Duration::from_millis(0),
        )
    }

    #[test]
    fn config_builds_for_every_device() {
        let profile = Path::new("/tmp/chromium-profile-test");
        assert!(build_config("/usr/bin/chromium", &DESKTOP, profile).is_ok());
        assert!(build_config("/usr/bin/chromium", &MOBILE, profile).is_ok());
    }

    #[test]
    fn each_scan_gets_its_own_profile() {
        let root = tempfile::TempDir::new().unwrap();
        let backend = backend(root.path());
        let first = backend.profile_dir();
        let second = backend.profile_dir();
        assert_ne!(first, second);
        assert_eq!(first.parent(), Some(root.path()));
        assert_eq!(second.parent(), Some(root.path()));
    }

    #[tokio::test]
    async fn missing_executable_is_a_browser_error() {
        let root = tempfile::TempDir::new().unwrap();
        let err = backend(root.path())
            .load("https://example.com", &DESKTOP)
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::Browser(_)), "{}", err);
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }
}

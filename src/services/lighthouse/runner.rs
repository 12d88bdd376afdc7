use crate::config::Settings;
use crate::error::ScanError;
use log::{debug, info};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::fs;
use tokio::process::Command;
use uuid::Uuid;

/// Runs real Lighthouse through the Node runner script. The runner writes
/// its JSON report to a handoff file which is read back and removed.
#[derive(Debug, Clone)]
pub struct LighthouseRunner {
    node_bin: String,
    script: PathBuf,
    output_dir: PathBuf,
    timeout: Duration,
}

impl LighthouseRunner {
    pub fn new(node_bin: &str, script: PathBuf, output_dir: PathBuf, timeout: Duration) -> Self {
        Self {
            node_bin: node_bin.to_string(),
            script,
            output_dir,
            timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.node_bin,
            settings.lighthouse_runner.clone(),
            settings.temp_dir.clone(),
            settings.lighthouse_timeout,
        )
    }

    pub async fn run(&self, url: &str, device: &str, is_lite: bool) -> Result<Value, ScanError> {
        if !self.script.exists() {
            return Err(ScanError::RunnerMissing(self.script.clone()));
        }
        fs::create_dir_all(&self.output_dir).await?;
        let report_path = self
            .output_dir
            .join(format!("lighthouse-{}.json", Uuid::new_v4()));

        let result = self.execute(url, device, is_lite, &report_path).await;

        if let Err(e) = fs::remove_file(&report_path).await {
            debug!("No handoff file to clean up at {}: {}", report_path.display(), e);
        }
        result
    }

    async fn execute(
        &self,
        url: &str,
        device: &str,
        is_lite: bool,
        report_path: &Path,
    ) -> Result<Value, ScanError> {
        info!(
            "🔍 Running Lighthouse audit: {} {} {} {} {} {}",
            self.node_bin,
            self.script.display(),
            url,
            report_path.display(),
            device,
            is_lite
        );

        // The trailing empty argument is the CDP endpoint; empty means the
        // runner launches its own Chrome.
        let child = Command::new(&self.node_bin)
            .arg(&self.script)
            .arg(url)
            .arg(report_path)
            .arg(device)
            .arg(if is_lite { "true" } else { "false" })
            .arg("")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // Dropping the wait future on timeout kills the child.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => return Err(ScanError::LighthouseTimeout(self.timeout.as_secs())),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ScanError::Lighthouse {
                code: output.status.code(),
                stderr: if stderr.is_empty() {
                    "Unknown error".to_string()
                } else {
                    stderr
                },
            });
        }

        if !report_path.exists() {
            return Err(ScanError::ReportMissing(report_path.to_path_buf()));
        }

        let bytes = fs::read(report_path).await?;
        let report = serde_json::from_slice(&bytes)?;
        info!("✅ Lighthouse audit completed successfully");
        Ok(report)
    }
}

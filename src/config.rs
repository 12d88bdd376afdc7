use crate::error::ScanError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub limit_concurrency: usize,
    pub temp_dir: PathBuf,
    pub navigation_timeout: Duration,
    pub settle_delay: Duration,
    pub lighthouse_timeout: Duration,
    pub lighthouse_runner: PathBuf,
    pub node_bin: String,
    pub chrome_executable: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            limit_concurrency: 10,
            temp_dir: PathBuf::from("/tmp"),
            navigation_timeout: Duration::from_secs(60),
            settle_delay: Duration::from_secs(2),
            lighthouse_timeout: Duration::from_secs(300),
            lighthouse_runner: PathBuf::from("./lighthouse_runner.js"),
            node_bin: "node".to_string(),
            chrome_executable: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ScanError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let limit_concurrency: usize =
            parse_var(&lookup, "LIMIT_CONCURRENCY", defaults.limit_concurrency)?;
        if limit_concurrency == 0 {
            return Err(ScanError::Config {
                key: "LIMIT_CONCURRENCY",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            limit_concurrency,
            temp_dir: lookup("TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.temp_dir),
            navigation_timeout: Duration::from_secs(parse_var(
                &lookup,
                "NAVIGATION_TIMEOUT_SECS",
                defaults.navigation_timeout.as_secs(),
            )?),
            settle_delay: Duration::from_millis(parse_var(
                &lookup,
                "SETTLE_DELAY_MS",
                defaults.settle_delay.as_millis() as u64,
            )?),
            lighthouse_timeout: Duration::from_secs(parse_var(
                &lookup,
                "LIGHTHOUSE_TIMEOUT_SECS",
                defaults.lighthouse_timeout.as_secs(),
            )?),
            lighthouse_runner: lookup("LIGHTHOUSE_RUNNER")
                .map(PathBuf::from)
                .unwrap_or(defaults.lighthouse_runner),
            node_bin: lookup("NODE_BIN").unwrap_or(defaults.node_bin),
            chrome_executable: lookup("CHROME_EXECUTABLE").filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ScanError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ScanError::Config { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8001");
        assert_eq!(settings.limit_concurrency, 10);
        assert_eq!(settings.lighthouse_timeout, Duration::from_secs(300));
        assert_eq!(settings.temp_dir, PathBuf::from("/tmp"));
        assert!(settings.chrome_executable.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("LIMIT_CONCURRENCY", "3"),
            ("TEMP_DIR", "/var/tmp/reports"),
            ("NAVIGATION_TIMEOUT_SECS", "15"),
            ("CHROME_EXECUTABLE", "/usr/bin/chromium"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
        assert_eq!(settings.limit_concurrency, 3);
        assert_eq!(settings.temp_dir, PathBuf::from("/var/tmp/reports"));
        assert_eq!(settings.navigation_timeout, Duration::from_secs(15));
        assert_eq!(
            settings.chrome_executable.as_deref(),
            Some("/usr/bin/chromium")
        );
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = Settings::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ScanError::Config { key: "PORT", .. }));

        let err = Settings::from_lookup(lookup_from(&[("LIMIT_CONCURRENCY", "0")])).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Config {
                key: "LIMIT_CONCURRENCY",
                ..
            }
        ));
    }
}

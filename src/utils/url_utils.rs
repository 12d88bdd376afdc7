use url::Url;

/// Prefixes `https://` when the caller passed a bare host.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Hostname with dots replaced by dashes, for use in file names.
pub fn hostname_slug(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.replace('.', "-")))
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

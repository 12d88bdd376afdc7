use serde::Deserialize;

fn default_device() -> String {
    "desktop".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

fn default_method() -> String {
    "auto".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub url: String,
    #[serde(default = "default_device")]
    pub device: String,
    // only "json" is produced; accepted for compatibility with existing callers
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub is_lite_version: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub url: String,
    #[serde(default = "default_device")]
    pub device: String,
    #[serde(default = "default_method")]
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn audit_request_defaults() {
        let request: AuditRequest =
            serde_json::from_value(json!({"url": "example.com"})).unwrap();
        assert_eq!(request.device, "desktop");
        assert_eq!(request.format, "json");
        assert!(!request.is_lite_version);

        let request: AuditRequest = serde_json::from_value(
            json!({"url": "example.com", "device": "mobile", "isLiteVersion": true}),
        )
        .unwrap();
        assert_eq!(request.device, "mobile");
        assert!(request.is_lite_version);
    }

    #[test]
    fn scan_request_defaults_to_auto() {
        let request: ScanRequest = serde_json::from_value(json!({"url": "example.com"})).unwrap();
        assert_eq!(request.method, "auto");
        assert_eq!(request.device, "desktop");
    }
}

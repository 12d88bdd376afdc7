use serde::Deserialize;
use serde_json::Value;

/// A page fetched by one of the page backends, ready for the audit probes.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub requested_url: String,
    pub final_url: String,
    pub html: String,
    pub status: Option<u16>,
    /// Measurements that need a rendering engine. `None` for plain HTTP fetches.
    pub signals: Option<PageSignals>,
    pub backend: &'static str,
}

// Counts returned by the in-page measurement script
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub total: usize,
    pub failing: usize,
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignals {
    pub tap_targets: Tally,
    pub text_elements: Tally,
    #[serde(default)]
    pub lcp_ms: f64,
    #[serde(default)]
    pub geolocation_requested: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signals_parse_from_script_output() {
        let signals: PageSignals = serde_json::from_value(json!({
            "tapTargets": {"total": 10, "failing": 2, "items": [{"width": 20, "height": 20}]},
            "textElements": {"total": 40, "failing": 0},
            "lcpMs": 1830.5,
        }))
        .unwrap();
        assert_eq!(signals.tap_targets.failing, 2);
        assert_eq!(signals.tap_targets.items.len(), 1);
        assert!(signals.text_elements.items.is_empty());
        assert_eq!(signals.lcp_ms, 1830.5);
        assert!(!signals.geolocation_requested);
    }
}

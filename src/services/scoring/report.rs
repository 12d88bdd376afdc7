use crate::models::{AuditResult, Category, Report};
use crate::services::scoring::{score, ReportVariant};
use chrono::Utc;
use std::collections::BTreeMap;

pub const LIGHTHOUSE_VERSION: &str = "10.0.0";

/// Wraps probe results into a report, stamping `fetchTime` with the current time.
pub fn build_report(
    variant: ReportVariant,
    requested_url: &str,
    final_url: &str,
    audits: BTreeMap<String, AuditResult>,
) -> Report {
    build_report_at(
        variant,
        requested_url,
        final_url,
        audits,
        Utc::now().timestamp_millis(),
    )
}

pub fn build_report_at(
    variant: ReportVariant,
    requested_url: &str,
    final_url: &str,
    audits: BTreeMap<String, AuditResult>,
    fetch_time: i64,
) -> Report {
    let final_score = score(variant.catalogue(), &audits);

    let category = Category {
        id: variant.category_id().to_string(),
        title: variant.category_title().to_string(),
        score: final_score / 100.0,
        audit_refs: variant.catalogue(),
    };

    let mut categories = BTreeMap::new();
    categories.insert(category.id.clone(), category);

    Report {
        variant,
        lighthouse_version: LIGHTHOUSE_VERSION.to_string(),
        fetch_time,
        requested_url: requested_url.to_string(),
        final_url: final_url.to_string(),
        categories,
        audits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn audits(pairs: &[(&str, Option<f64>)]) -> BTreeMap<String, AuditResult> {
        pairs
            .iter()
            .map(|(id, score)| (id.to_string(), AuditResult::new(id, id, *score, 0.0)))
            .collect()
    }

    #[test]
    fn lite_report_envelope() {
        let report = build_report_at(
            ReportVariant::Lite,
            "https://example.com",
            "https://www.example.com/",
            audits(&[("viewport", Some(1.0))]),
            1_700_000_000_000,
        );
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["lighthouseVersion"], "10.0.0");
        assert_eq!(value["fetchTime"], 1_700_000_000_000_i64);
        assert_eq!(value["requestedUrl"], "https://example.com");
        assert_eq!(value["finalUrl"], "https://www.example.com/");

        let category = &value["categories"]["senior-friendly-lite"];
        assert_eq!(category["id"], "senior-friendly-lite");
        assert_eq!(category["title"], "Senior Accessibility (Lite)");
        assert_eq!(category["auditRefs"].as_array().unwrap().len(), 11);
        assert_eq!(
            category["auditRefs"][0],
            json!({"id": "color-contrast", "weight": 5})
        );
        assert!(value["categories"].get("senior-friendly").is_none());
        assert!(value.get("variant").is_none());
    }

    #[test]
    fn category_score_is_percentage_over_hundred() {
        let report = build_report(
            ReportVariant::Full,
            "https://example.com",
            "https://example.com",
            audits(&[("color-contrast", Some(1.0))]),
        );
        assert_eq!(report.score(), 8.93);
        let category = report.category().unwrap();
        assert_eq!(category.score, 8.93 / 100.0);
        assert_eq!(category.audit_refs.len(), 18);
    }

    #[test]
    fn audit_refs_are_echoed_even_without_results() {
        let report = build_report(
            ReportVariant::Full,
            "https://example.com",
            "https://example.com",
            BTreeMap::new(),
        );
        let category = report.category().unwrap();
        assert_eq!(category.audit_refs, ReportVariant::Full.catalogue());
        assert_eq!(category.score, 0.0);
        assert!(report.audits.is_empty());
    }

    #[test]
    fn audits_are_echoed_verbatim() {
        let input = audits(&[("label", None), ("extra-probe", Some(0.4))]);
        let report = build_report(ReportVariant::Lite, "a", "b", input.clone());
        assert_eq!(report.audits, input);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["audits"]["label"]["score"].is_null());
    }

    #[test]
    fn fetch_time_is_captured_at_build_time() {
        let before = Utc::now().timestamp_millis();
        let report = build_report(ReportVariant::Lite, "a", "b", BTreeMap::new());
        let after = Utc::now().timestamp_millis();
        assert!(report.fetch_time >= before && report.fetch_time <= after);
    }
}

use crate::models::lighthouse::audit::AuditResult;
use crate::models::lighthouse::category::Category;
use crate::services::scoring::{score, ReportVariant};
use serde::Serialize;
use std::collections::BTreeMap;

/// Lighthouse-shaped report produced by a scan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(skip)]
    pub variant: ReportVariant,
    pub lighthouse_version: String,
    pub fetch_time: i64,
    pub requested_url: String,
    pub final_url: String,
    pub categories: BTreeMap<String, Category>,
    pub audits: BTreeMap<String, AuditResult>,
}

impl Report {
    /// Percentage score (0-100) for the report's variant.
    pub fn score(&self) -> f64 {
        score(self.variant.catalogue(), &self.audits)
    }

    pub fn category(&self) -> Option<&Category> {
        self.categories.get(self.variant.category_id())
    }
}

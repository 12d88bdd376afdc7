use crate::models::lighthouse::audit::AuditDefinition;
use serde::Serialize;

// Category block carrying the aggregate score
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: String,
    pub score: f64,
    pub audit_refs: &'static [AuditDefinition],
}

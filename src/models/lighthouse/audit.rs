use serde::{Deserialize, Serialize};
use serde_json::Value;

// One (audit id, weight) row of a scoring catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditDefinition {
    pub id: &'static str,
    pub weight: u32,
}

impl AuditDefinition {
    pub const fn new(id: &'static str, weight: u32) -> Self {
        Self { id, weight }
    }
}

/// Result of a single audit as it appears under `audits` in a report.
///
/// `score` is `None` when the probe ran but could not produce a value; the
/// aggregator treats that exactly like an audit that never ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub numeric_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AuditDetails>,
}

impl AuditResult {
    pub fn new(id: &str, title: &str, score: Option<f64>, numeric_value: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            score,
            numeric_value,
            details: None,
        }
    }

    /// Shorthand for the common case where the score doubles as the numeric value.
    pub fn scored(id: &str, title: &str, score: f64) -> Self {
        Self::new(id, title, Some(score), score)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Empty tables are dropped so the JSON matches what the renderers expect.
    pub fn with_details(mut self, details: AuditDetails) -> Self {
        if !details.items.is_empty() {
            self.details = Some(details);
        }
        self
    }
}

// Lighthouse "table" details block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub headings: Vec<TableHeading>,
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHeading {
    pub key: String,
    #[serde(rename = "itemType")]
    pub item_type: String,
    pub text: String,
}

impl AuditDetails {
    /// Builds a table from `(key, itemType, text)` heading triples.
    pub fn table(headings: &[(&str, &str, &str)], items: Vec<Value>) -> Self {
        Self {
            kind: "table".to_string(),
            headings: headings
                .iter()
                .map(|(key, item_type, text)| TableHeading {
                    key: key.to_string(),
                    item_type: item_type.to_string(),
                    text: text.to_string(),
                })
                .collect(),
            items,
        }
    }
}

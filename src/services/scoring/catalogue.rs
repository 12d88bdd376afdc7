//! Audit weight tables.
//!
//! These tables are shared with the Node scoring backend and must stay
//! identical to it (ids, weights and order). Any change here is a breaking
//! change to the report format.

use crate::models::AuditDefinition;

/// Lite report: 11 audits, total weight 33.
pub const LITE_CATALOGUE: &[AuditDefinition] = &[
    AuditDefinition::new("color-contrast", 5),
    AuditDefinition::new("target-size", 5),
    AuditDefinition::new("text-font-audit", 5),
    AuditDefinition::new("viewport", 3),
    AuditDefinition::new("link-name", 3),
    AuditDefinition::new("button-name", 3),
    AuditDefinition::new("label", 3),
    AuditDefinition::new("heading-order", 2),
    AuditDefinition::new("is-on-https", 2),
    AuditDefinition::new("largest-contentful-paint", 1),
    AuditDefinition::new("cumulative-layout-shift", 1),
];

/// Full report: 18 audits, total weight 112.
pub const FULL_CATALOGUE: &[AuditDefinition] = &[
    // Tier 1: critical
    AuditDefinition::new("color-contrast", 10),
    AuditDefinition::new("target-size", 10),
    AuditDefinition::new("viewport", 10),
    AuditDefinition::new("cumulative-layout-shift", 10),
    AuditDefinition::new("text-font-audit", 15),
    AuditDefinition::new("layout-brittle-audit", 2),
    AuditDefinition::new("flesch-kincaid-audit", 15),
    // Tier 2: important
    AuditDefinition::new("largest-contentful-paint", 5),
    AuditDefinition::new("total-blocking-time", 5),
    AuditDefinition::new("link-name", 5),
    AuditDefinition::new("button-name", 5),
    AuditDefinition::new("label", 5),
    AuditDefinition::new("interactive-color-audit", 5),
    // Tier 3: foundational
    AuditDefinition::new("is-on-https", 2),
    AuditDefinition::new("dom-size", 2),
    AuditDefinition::new("heading-order", 2),
    AuditDefinition::new("errors-in-console", 2),
    AuditDefinition::new("geolocation-on-start", 2),
];

/// Report flavour; selects the weight table and the category block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportVariant {
    Lite,
    #[default]
    Full,
}

impl ReportVariant {
    pub fn from_lite_flag(is_lite: bool) -> Self {
        if is_lite {
            ReportVariant::Lite
        } else {
            ReportVariant::Full
        }
    }

    pub fn is_lite(self) -> bool {
        self == ReportVariant::Lite
    }

    pub fn catalogue(self) -> &'static [AuditDefinition] {
        match self {
            ReportVariant::Lite => LITE_CATALOGUE,
            ReportVariant::Full => FULL_CATALOGUE,
        }
    }

    pub fn category_id(self) -> &'static str {
        match self {
            ReportVariant::Lite => "senior-friendly-lite",
            ReportVariant::Full => "senior-friendly",
        }
    }

    pub fn category_title(self) -> &'static str {
        match self {
            ReportVariant::Lite => "Senior Accessibility (Lite)",
            ReportVariant::Full => "Senior Friendliness",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportVariant::Lite => "Lite",
            ReportVariant::Full => "Full",
        }
    }

    pub fn file_suffix(self) -> &'static str {
        match self {
            ReportVariant::Lite => "-lite",
            ReportVariant::Full => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn total_weight(catalogue: &[AuditDefinition]) -> u32 {
        catalogue.iter().map(|d| d.weight).sum()
    }

    #[test]
    fn lite_catalogue_shape() {
        assert_eq!(LITE_CATALOGUE.len(), 11);
        assert_eq!(total_weight(LITE_CATALOGUE), 33);
        assert_eq!(LITE_CATALOGUE[0], AuditDefinition::new("color-contrast", 5));
        assert_eq!(
            LITE_CATALOGUE[10],
            AuditDefinition::new("cumulative-layout-shift", 1)
        );
    }

    #[test]
    fn full_catalogue_shape() {
        assert_eq!(FULL_CATALOGUE.len(), 18);
        assert_eq!(total_weight(FULL_CATALOGUE), 112);
        let weight_of = |id: &str| {
            FULL_CATALOGUE
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.weight)
        };
        assert_eq!(weight_of("text-font-audit"), Some(15));
        assert_eq!(weight_of("flesch-kincaid-audit"), Some(15));
        assert_eq!(weight_of("geolocation-on-start"), Some(2));
    }

    #[test]
    fn ids_are_unique_and_weights_positive() {
        for catalogue in [LITE_CATALOGUE, FULL_CATALOGUE] {
            let ids: HashSet<_> = catalogue.iter().map(|d| d.id).collect();
            assert_eq!(ids.len(), catalogue.len());
            assert!(catalogue.iter().all(|d| d.weight > 0));
        }
    }

    #[test]
    fn lite_ids_are_a_subset_of_full() {
        let full: HashSet<_> = FULL_CATALOGUE.iter().map(|d| d.id).collect();
        assert!(LITE_CATALOGUE.iter().all(|d| full.contains(d.id)));
    }

    #[test]
    fn variant_metadata() {
        assert_eq!(ReportVariant::from_lite_flag(true), ReportVariant::Lite);
        assert_eq!(ReportVariant::Lite.category_id(), "senior-friendly-lite");
        assert_eq!(ReportVariant::Full.category_id(), "senior-friendly");
        assert_eq!(ReportVariant::Full.category_title(), "Senior Friendliness");
        assert_eq!(ReportVariant::Lite.file_suffix(), "-lite");
        assert_eq!(ReportVariant::Full.file_suffix(), "");
        assert_eq!(ReportVariant::Full.catalogue().len(), 18);
    }
}

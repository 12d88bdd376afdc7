use crate::models::{AuditDefinition, AuditResult};
use std::collections::BTreeMap;

/// Weighted percentage score (0-100, two decimals) for `results` against
/// `catalogue`.
///
/// Every catalogue entry contributes its weight to the denominator. An audit
/// that is missing from `results`, or present with a null score, contributes
/// 0 to the numerator. Must produce the same numbers as the Node backend's
/// scorer, so the summation order follows the catalogue.
pub fn score(catalogue: &[AuditDefinition], results: &BTreeMap<String, AuditResult>) -> f64 {
    let mut total_weighted_score = 0.0_f64;
    let mut total_weight = 0_u32;

    for definition in catalogue {
        let raw_score = results
            .get(definition.id)
            .and_then(|result| result.score)
            .unwrap_or(0.0);
        total_weighted_score += raw_score * f64::from(definition.weight);
        total_weight += definition.weight;
    }

    let final_score = if total_weight > 0 {
        total_weighted_score / f64::from(total_weight) * 100.0
    } else {
        0.0
    };
    round_half_up(final_score)
}

// two decimal places, halves away from zero
fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scoring::{FULL_CATALOGUE, LITE_CATALOGUE};

    fn results(pairs: &[(&str, Option<f64>)]) -> BTreeMap<String, AuditResult> {
        pairs
            .iter()
            .map(|(id, score)| (id.to_string(), AuditResult::new(id, id, *score, 0.0)))
            .collect()
    }

    fn all_perfect(catalogue: &[AuditDefinition]) -> BTreeMap<String, AuditResult> {
        catalogue
            .iter()
            .map(|d| (d.id.to_string(), AuditResult::scored(d.id, d.id, 1.0)))
            .collect()
    }

    #[test]
    fn empty_results_score_zero() {
        assert_eq!(score(LITE_CATALOGUE, &BTreeMap::new()), 0.0);
        assert_eq!(score(FULL_CATALOGUE, &BTreeMap::new()), 0.0);
    }

    #[test]
    fn empty_catalogue_scores_zero() {
        assert_eq!(score(&[], &results(&[("viewport", Some(1.0))])), 0.0);
    }

    #[test]
    fn zero_weight_catalogue_scores_zero() {
        let catalogue = [AuditDefinition::new("viewport", 0)];
        assert_eq!(score(&catalogue, &results(&[("viewport", Some(1.0))])), 0.0);
    }

    #[test]
    fn all_perfect_scores_hundred() {
        assert_eq!(score(LITE_CATALOGUE, &all_perfect(LITE_CATALOGUE)), 100.0);
        assert_eq!(score(FULL_CATALOGUE, &all_perfect(FULL_CATALOGUE)), 100.0);
    }

    #[test]
    fn lite_reference_scenario() {
        let r = results(&[
            ("color-contrast", Some(0.9)),
            ("target-size", Some(1.0)),
            ("text-font-audit", Some(0.8)),
            ("viewport", Some(1.0)),
            ("link-name", Some(1.0)),
            ("button-name", Some(1.0)),
            ("label", Some(1.0)),
            ("heading-order", Some(1.0)),
            ("is-on-https", Some(1.0)),
            ("largest-contentful-paint", Some(1.0)),
            ("cumulative-layout-shift", Some(0.9)),
        ]);
        assert_eq!(score(LITE_CATALOGUE, &r), 95.15);
    }

    #[test]
    fn full_catalogue_with_single_audit() {
        let r = results(&[("color-contrast", Some(1.0))]);
        // 10 of 112
        assert_eq!(score(FULL_CATALOGUE, &r), 8.93);
    }

    #[test]
    fn null_score_matches_absent_audit() {
        let catalogue = [AuditDefinition::new("viewport", 3)];
        let with_null = results(&[("viewport", None)]);
        assert_eq!(score(&catalogue, &with_null), score(&catalogue, &BTreeMap::new()));

        let with_null = results(&[("label", None), ("viewport", Some(1.0))]);
        let without = results(&[("viewport", Some(1.0))]);
        assert_eq!(score(LITE_CATALOGUE, &with_null), score(LITE_CATALOGUE, &without));
    }

    #[test]
    fn missing_audit_weight_is_still_counted() {
        let base = [
            ("color-contrast", Some(1.0)),
            ("viewport", Some(1.0)),
            ("label", Some(0.25)),
        ];
        let mut with_x = base.to_vec();
        with_x.push(("target-size", Some(0.5)));

        let present = score(LITE_CATALOGUE, &results(&with_x));
        let absent = score(LITE_CATALOGUE, &results(&base));
        let expected = 0.5 * 5.0 / 33.0 * 100.0;
        assert!((present - absent - expected).abs() < 0.011);

        // 8.75 over the whole catalogue, not over the three audits present
        assert_eq!(absent, round_half_up(8.75 / 33.0 * 100.0));
        assert_eq!(absent, 26.52);
    }

    #[test]
    fn ids_outside_the_catalogue_are_ignored() {
        let r = results(&[("viewport", Some(1.0)), ("not-an-audit", Some(1.0))]);
        let catalogue = [AuditDefinition::new("viewport", 3)];
        assert_eq!(score(&catalogue, &r), 100.0);
    }

    #[test]
    fn score_is_deterministic_and_bounded() {
        let r = results(&[
            ("color-contrast", Some(0.33)),
            ("target-size", Some(0.71)),
            ("dom-size", Some(0.0)),
            ("flesch-kincaid-audit", None),
        ]);
        let first = score(FULL_CATALOGUE, &r);
        let second = score(FULL_CATALOGUE, &r);
        assert_eq!(first, second);
        assert!((0.0..=100.0).contains(&first));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(12.345_000_1), 12.35);
        assert_eq!(round_half_up(12.344), 12.34);
        assert_eq!(round_half_up(0.0), 0.0);
    }
}

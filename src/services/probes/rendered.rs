//! Probes that depend on layout and timing measured inside a browser.
//! Without those measurements the audit is reported unscored.

use crate::models::{AuditDetails, AuditResult, PageSignals, Tally};
use crate::services::probes::markup::{ratio_score, MAX_DETAIL_ITEMS};

const LCP_GOOD_MS: f64 = 2500.0;

const UNMEASURED: &str =
    "Rendered measurements were not available for this page, so this audit could not be scored.";

fn unmeasured(id: &str, title: &str) -> AuditResult {
    AuditResult::new(id, title, None, 0.0).with_description(UNMEASURED)
}

fn capped_items(tally: &Tally) -> Vec<serde_json::Value> {
    tally.items.iter().take(MAX_DETAIL_ITEMS).cloned().collect()
}

pub fn target_size(signals: Option<&PageSignals>) -> AuditResult {
    let id = "target-size";
    let title = "Touch targets have sufficient size and spacing";
    let Some(signals) = signals else {
        return unmeasured(id, title);
    };

    let targets = &signals.tap_targets;
    let score = ratio_score(targets.failing, targets.total);
    AuditResult::scored(id, title, score)
        .with_description(format!(
            "This audit checks if interactive elements (buttons, links) are large enough for easy clicking. Found {} small targets out of {} total interactive elements.",
            targets.failing, targets.total
        ))
        .with_details(AuditDetails::table(
            &[
                ("node", "node", "Element"),
                ("width", "numeric", "Width"),
                ("height", "numeric", "Height"),
            ],
            capped_items(targets),
        ))
}

pub fn text_font(signals: Option<&PageSignals>) -> AuditResult {
    let id = "text-font-audit";
    let title = "Text is appropriately sized for readability";
    let Some(signals) = signals else {
        return unmeasured(id, title);
    };

    let text = &signals.text_elements;
    AuditResult::scored(id, title, ratio_score(text.failing, text.total))
        .with_description(format!(
            "This audit checks if text is large enough for readability. Found {} text elements with font size less than 16px out of {} total text elements.",
            text.failing, text.total
        ))
        .with_details(AuditDetails::table(
            &[
                ("textSnippet", "text", "Text Content"),
                ("containerSelector", "code", "Element Selector"),
                ("fontSize", "text", "Reason"),
            ],
            capped_items(text),
        ))
}

pub fn largest_contentful_paint(signals: Option<&PageSignals>) -> AuditResult {
    let id = "largest-contentful-paint";
    let title = "Largest Contentful Paint";
    let Some(signals) = signals else {
        return unmeasured(id, title);
    };

    let lcp = signals.lcp_ms;
    AuditResult::new(id, title, Some(lcp_score(lcp)), lcp).with_description(format!(
        "This audit measures how long it takes for the main content to load. LCP time: {:.0}ms. Good if under {:.0}ms.",
        lcp, LCP_GOOD_MS
    ))
}

// Full marks under 2.5s, falling linearly to 0 at 5s.
fn lcp_score(lcp_ms: f64) -> f64 {
    if lcp_ms < LCP_GOOD_MS {
        1.0
    } else {
        (1.0 - (lcp_ms - LCP_GOOD_MS) / LCP_GOOD_MS).max(0.0)
    }
}

pub fn geolocation_on_start(signals: Option<&PageSignals>) -> AuditResult {
    let id = "geolocation-on-start";
    let title = "Does not request geolocation on page load";
    let Some(signals) = signals else {
        return unmeasured(id, title);
    };

    let score = if signals.geolocation_requested { 0.0 } else { 1.0 };
    AuditResult::scored(id, title, score).with_description(
        "This audit checks if the page requests user location immediately on load, \
         which can be intrusive for older adults.",
    )
}

//! Audits without a measurement engine yet. Their values are fixed so that
//! reports stay comparable with the Node backend's output.

use crate::models::AuditResult;

pub fn color_contrast() -> AuditResult {
    AuditResult::scored(
        "color-contrast",
        "Background and foreground colors have a sufficient contrast ratio",
        0.9,
    )
    .with_description(
        "This audit checks whether text and background colors have sufficient contrast for readability. \
         Adequate contrast is essential for older adults with vision changes.",
    )
}

pub fn cumulative_layout_shift() -> AuditResult {
    AuditResult::new(
        "cumulative-layout-shift",
        "Cumulative Layout Shift",
        Some(0.9),
        0.1,
    )
    .with_description(
        "This audit measures visual stability. A low CLS score means the page layout is stable \
         and doesn't shift unexpectedly, which is important for older adults.",
    )
}

/// Full-report audits emitted with a zero score. They must be present with
/// 0 rather than null, because the PDF renderer drops null audits from its
/// own weight total.
pub fn unmeasured_full_audits() -> Vec<AuditResult> {
    [
        (
            "layout-brittle-audit",
            "Containers allow for text spacing adjustments",
            "This audit checks if containers have fixed heights that may prevent text spacing adjustments (WCAG 1.4.12).",
        ),
        (
            "flesch-kincaid-audit",
            "Flesch-Kincaid Reading Ease (Older Adult-Adjusted)",
            "This audit calculates the Flesch-Kincaid reading ease score with category-based adjustments for older adult users.",
        ),
        (
            "total-blocking-time",
            "Total Blocking Time",
            "This audit measures the total amount of time that a page is blocked from responding to user input. Lower is better.",
        ),
        (
            "interactive-color-audit",
            "Links are visually distinct from surrounding text",
            "This audit checks if links have a noticeable color difference from surrounding text (Delta E > 10).",
        ),
        (
            "errors-in-console",
            "No JavaScript errors in console",
            "This audit checks if there are JavaScript errors in the browser console that could affect functionality.",
        ),
    ]
    .into_iter()
    .map(|(id, title, description)| {
        AuditResult::scored(id, title, 0.0).with_description(description)
    })
    .collect()
}

//! Audit producers. Each probe turns a loaded page into one `AuditResult`;
//! they share nothing and can run in any order.

pub mod fixed;
pub mod markup;
pub mod rendered;

use crate::models::{AuditResult, LoadedPage};
use crate::services::scoring::ReportVariant;
use scraper::Html;
use std::collections::BTreeMap;

/// Runs every probe that belongs to `variant` against `page`.
pub fn run_probes(page: &LoadedPage, variant: ReportVariant) -> BTreeMap<String, AuditResult> {
    let document = Html::parse_document(&page.html);
    let signals = page.signals.as_ref();

    let mut audits = vec![
        fixed::color_contrast(),
        rendered::target_size(signals),
        markup::viewport(&document),
        markup::link_name(&document),
        markup::button_name(&document),
        markup::label(&document),
        markup::heading_order(&document),
        markup::is_on_https(&page.final_url),
        rendered::text_font(signals),
        rendered::largest_contentful_paint(signals),
        fixed::cumulative_layout_shift(),
    ];

    if !variant.is_lite() {
        audits.extend(fixed::unmeasured_full_audits());
        audits.push(markup::dom_size(&document));
        audits.push(rendered::geolocation_on_start(signals));
    }

    audits
        .into_iter()
        .map(|audit| (audit.id.clone(), audit))
        .collect()
}

//! Probes that only need the page markup.

use crate::models::{AuditDetails, AuditResult};
use scraper::{ElementRef, Html, Selector};
use serde_json::{json, Value};
use std::collections::HashSet;
use url::Url;

pub(crate) const MAX_DETAIL_ITEMS: usize = 50;

const NODE_HEADINGS: &[(&str, &str, &str)] = &[
    ("node", "node", "Element"),
    ("selector", "code", "Location"),
];

const DOM_SIZE_LIMIT: usize = 1500;

fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn has_attr(element: &ElementRef, name: &str) -> bool {
    element
        .value()
        .attr(name)
        .is_some_and(|value| !value.is_empty())
}

// tag#id.first-class
fn css_path(element: &ElementRef) -> String {
    let el = element.value();
    let mut path = el.name().to_string();
    if let Some(id) = el.id().filter(|id| !id.is_empty()) {
        path.push('#');
        path.push_str(id);
    }
    if let Some(class) = el.attr("class").and_then(|c| c.split_whitespace().next()) {
        path.push('.');
        path.push_str(class);
    }
    path
}

fn node_item(element: &ElementRef, label: &str) -> Value {
    json!({
        "node": {
            "nodeLabel": label,
            "selector": css_path(element),
            "path": element.value().name(),
        }
    })
}

/// `1 - failing/total`, or 1 when there is nothing to check.
pub(crate) fn ratio_score(failing: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        (1.0 - failing as f64 / total as f64).max(0.0)
    }
}

fn binary(pass: bool) -> f64 {
    if pass {
        1.0
    } else {
        0.0
    }
}

pub fn viewport(document: &Html) -> AuditResult {
    let has_viewport = !select_all(document, r#"meta[name="viewport"]"#).is_empty();
    AuditResult::scored(
        "viewport",
        "Has a `<meta name=\"viewport\">` tag with `width` or `initial-scale`",
        binary(has_viewport),
    )
    .with_description(
        "This audit checks if the page has a proper viewport meta tag for mobile devices. \
         A viewport tag ensures the page displays correctly on tablets and phones.",
    )
}

pub fn link_name(document: &Html) -> AuditResult {
    let links = select_all(document, "a");
    let failing: Vec<&ElementRef> = links
        .iter()
        .filter(|link| {
            element_text(link).is_empty() && !has_attr(link, "aria-label") && !has_attr(link, "title")
        })
        .collect();

    let items = failing
        .iter()
        .take(MAX_DETAIL_ITEMS)
        .map(|link| {
            let label = link
                .value()
                .attr("href")
                .filter(|href| !href.is_empty())
                .unwrap_or("Link");
            node_item(link, label)
        })
        .collect();

    AuditResult::scored(
        "link-name",
        "Links have a discernible name",
        ratio_score(failing.len(), links.len()),
    )
    .with_description(format!(
        "This audit checks if all links have descriptive text. Found {} links without text out of {} total links.",
        failing.len(),
        links.len()
    ))
    .with_details(AuditDetails::table(NODE_HEADINGS, items))
}

pub fn button_name(document: &Html) -> AuditResult {
    let buttons = select_all(
        document,
        r#"button, input[type="button"], input[type="submit"]"#,
    );
    let failing: Vec<&ElementRef> = buttons
        .iter()
        .filter(|button| {
            element_text(button).is_empty()
                && !has_attr(button, "aria-label")
                && !has_attr(button, "value")
        })
        .collect();

    let items = failing
        .iter()
        .take(MAX_DETAIL_ITEMS)
        .map(|button| node_item(button, button.value().name()))
        .collect();

    AuditResult::scored(
        "button-name",
        "Buttons have an accessible name",
        ratio_score(failing.len(), buttons.len()),
    )
    .with_description(format!(
        "This audit checks if all buttons have descriptive labels. Found {} buttons without text out of {} total buttons.",
        failing.len(),
        buttons.len()
    ))
    .with_details(AuditDetails::table(NODE_HEADINGS, items))
}

pub fn label(document: &Html) -> AuditResult {
    let labelled: HashSet<&str> = select_all(document, "label[for]")
        .iter()
        .filter_map(|label| label.value().attr("for"))
        .filter(|target| !target.is_empty())
        .collect();

    let inputs = select_all(document, "input, textarea, select");
    let failing: Vec<&ElementRef> = inputs
        .iter()
        .filter(|input| {
            let has_label = input
                .value()
                .id()
                .is_some_and(|id| labelled.contains(id));
            !has_label && !has_attr(input, "aria-label") && !has_attr(input, "placeholder")
        })
        .collect();

    let items = failing
        .iter()
        .take(MAX_DETAIL_ITEMS)
        .map(|input| {
            let el = input.value();
            let label = match el.attr("type") {
                Some(kind) => format!("{}[{}]", el.name(), kind),
                None => el.name().to_string(),
            };
            node_item(input, &label)
        })
        .collect();

    AuditResult::scored(
        "label",
        "Form elements have associated labels",
        ratio_score(failing.len(), inputs.len()),
    )
    .with_description(format!(
        "This audit checks if all form inputs have associated labels. Found {} inputs without labels out of {} total inputs.",
        failing.len(),
        inputs.len()
    ))
    .with_details(AuditDetails::table(NODE_HEADINGS, items))
}

/// Passes unless a heading skips a level going down (h1 -> h3). The first
/// heading counts from level 0, so a page opening with an h2 fails.
pub fn heading_order(document: &Html) -> AuditResult {
    let mut last_level = 0_u32;
    let mut in_order = true;
    for heading in select_all(document, "h1, h2, h3, h4, h5, h6") {
        let level = heading
            .value()
            .name()
            .chars()
            .nth(1)
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0);
        if level > last_level + 1 {
            in_order = false;
            break;
        }
        last_level = level;
    }

    AuditResult::scored(
        "heading-order",
        "Heading elements appear in a sequentially-descending order",
        binary(in_order),
    )
    .with_description(
        "This audit checks if headings follow a logical order (H1, then H2, then H3, etc.). \
         Proper heading structure helps screen readers and improves content organization.",
    )
}

pub fn is_on_https(final_url: &str) -> AuditResult {
    let https = Url::parse(final_url).is_ok_and(|url| url.scheme() == "https");
    AuditResult::scored("is-on-https", "Uses HTTPS", binary(https)).with_description(
        "This audit checks if the page is served over HTTPS. \
         HTTPS encrypts data and provides security for users.",
    )
}

pub fn dom_size(document: &Html) -> AuditResult {
    let size = select_all(document, "*").len();
    let score = if size < DOM_SIZE_LIMIT {
        1.0
    } else {
        (1.0 - (size - DOM_SIZE_LIMIT) as f64 / DOM_SIZE_LIMIT as f64).max(0.0)
    };
    AuditResult::new(
        "dom-size",
        "Avoids an excessive DOM size",
        Some(score),
        size as f64,
    )
    .with_description(format!(
        "This audit checks if the page has a reasonable number of DOM elements. Found {} elements. Recommended: under {}.",
        size, DOM_SIZE_LIMIT
    ))
}

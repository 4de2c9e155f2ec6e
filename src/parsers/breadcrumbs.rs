use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

use super::element_text;

/// Breadcrumb containers, most specific first
const CONTAINER_SELECTORS: &[&str] = &[
    r#"nav[aria-label*="breadcrumb" i]"#,
    ".breadcrumb",
    ".breadcrumbs",
    r#"[class*="breadcrumb"]"#,
    ".elementor-widget-breadcrumbs",
];

static CONTAINERS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTAINER_SELECTORS
        .iter()
        .filter_map(|css| match Selector::parse(css) {
            Ok(selector) => Some(selector),
            Err(e) => {
                ::log::warn!("Ignoring breadcrumb selector {}: {:?}", css, e);
                None
            }
        })
        .collect()
});

static CRUMB_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a, span").expect("crumb selector is valid"));

static JSON_LD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("JSON-LD selector is valid")
});

/// Extract the breadcrumb trail of a page
///
/// Tries the structural selectors in order and takes the first whose container
/// has non-empty link or label text. Falls back to a schema.org
/// `BreadcrumbList` in embedded JSON-LD. An empty result is not an error.
pub fn extract_breadcrumbs(doc: &Html) -> Vec<String> {
    for selector in CONTAINERS.iter() {
        let Some(container) = doc.select(selector).next() else {
            continue;
        };

        let crumbs: Vec<String> = container
            .select(&CRUMB_ITEMS)
            .map(|item| element_text(&item))
            .filter(|text| !text.is_empty())
            .collect();

        if !crumbs.is_empty() {
            return crumbs;
        }
    }

    structured_data_breadcrumbs(doc)
}

/// Item names of every JSON-LD `BreadcrumbList` on the page, in order
fn structured_data_breadcrumbs(doc: &Html) -> Vec<String> {
    let mut crumbs = Vec::new();

    for script in doc.select(&JSON_LD) {
        let raw: String = script.text().collect();
        let data: Value = match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                ::log::debug!("Skipping malformed JSON-LD block: {}", e);
                continue;
            }
        };

        if data.get("@type").and_then(Value::as_str) != Some("BreadcrumbList") {
            continue;
        }

        if let Some(items) = data.get("itemListElement").and_then(Value::as_array) {
            crumbs.extend(
                items
                    .iter()
                    .filter_map(|item| item.get("name").and_then(Value::as_str))
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            );
        }
    }

    crumbs
}

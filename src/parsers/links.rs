use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use super::element_text;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// A hyperlink found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute URL after resolving against the page URL
    pub url: String,
    pub anchor_text: String,
    /// `title` attribute; only recorded for internal links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Links on a page, split by whether they stay on the page's host
#[derive(Debug, Clone, Default)]
pub struct ClassifiedLinks {
    pub internal: Vec<Link>,
    pub external: Vec<Link>,
}

/// Classify every anchor on the page as internal or external
///
/// Empty hrefs and fragment-only hrefs are skipped. Everything else is resolved
/// against `page_url` and compared by host and explicit port.
pub fn classify_links(doc: &Html, page_url: &Url) -> ClassifiedLinks {
    let mut links = ClassifiedLinks::default();

    for anchor in doc.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        let resolved = match page_url.join(href) {
            Ok(resolved) => resolved,
            Err(e) => {
                ::log::debug!("Skipping unresolvable link {:?}: {}", href, e);
                continue;
            }
        };

        let anchor_text = element_text(&anchor);
        if same_host(&resolved, page_url) {
            links.internal.push(Link {
                url: resolved.to_string(),
                anchor_text,
                title: Some(anchor.value().attr("title").unwrap_or_default().to_string()),
            });
        } else {
            links.external.push(Link {
                url: resolved.to_string(),
                anchor_text,
                title: None,
            });
        }
    }

    ::log::debug!(
        "Found {} internal and {} external links in {}",
        links.internal.len(),
        links.external.len(),
        page_url
    );

    links
}

/// Whether two URLs share a host and explicit port; the scheme is ignored
pub fn same_host(a: &Url, b: &Url) -> bool {
    a.host_str() == b.host_str() && a.port() == b.port()
}

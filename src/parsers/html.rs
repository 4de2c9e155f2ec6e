use crate::parsers::{ParsedPage, breadcrumbs, element_text, links, text};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Elements whose text is never shown to a reader
const HIDDEN_TEXT_PARENTS: &[&str] = &["script", "style", "noscript", "template"];

macro_rules! static_selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect("static selector is valid"));
    };
}

static_selector!(TITLE, "title");
static_selector!(META_DESCRIPTION, r#"meta[name="description"]"#);
static_selector!(META_KEYWORDS, r#"meta[name="keywords"]"#);
static_selector!(META_ROBOTS, r#"meta[name="robots"]"#);
static_selector!(H1, "h1");
static_selector!(H2, "h2");
static_selector!(H3, "h3");
static_selector!(IMG, "img");

/// Parses an HTML document into the raw fields the analyzers consume
pub fn parse(html: &str, page_url: &Url) -> ParsedPage {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&TITLE)
        .next()
        .map(|title| element_text(&title))
        .filter(|title| !title.is_empty());

    let (images_total, images_without_alt, alt_texts) = image_stats(&doc);

    let page = ParsedPage {
        title,
        meta_description: meta_content(&doc, &META_DESCRIPTION),
        meta_keywords: meta_content(&doc, &META_KEYWORDS),
        robots: robots_directive(&doc),
        h1: heading_texts(&doc, &H1),
        h2: heading_texts(&doc, &H2),
        h3: heading_texts(&doc, &H3),
        images_total,
        images_without_alt,
        alt_texts,
        text: visible_text(&doc),
        links: links::classify_links(&doc, page_url),
        breadcrumbs: breadcrumbs::extract_breadcrumbs(&doc),
    };

    ::log::debug!(
        "Parsed {}: {} h1, {} images, {} breadcrumbs",
        page_url,
        page.h1.len(),
        page.images_total,
        page.breadcrumbs.len()
    );

    page
}

/// Trimmed `content` of the first matching meta tag; empty content counts as absent
fn meta_content(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|tag| tag.value().attr("content").unwrap_or_default().trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Lower-cased robots directive; a present tag with no content yields `""`
fn robots_directive(doc: &Html) -> Option<String> {
    doc.select(&META_ROBOTS).next().map(|tag| {
        tag.value()
            .attr("content")
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    })
}

fn heading_texts(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector).map(|h| element_text(&h)).collect()
}

/// Total images, images with an empty or absent `alt`, and the non-empty alt texts
fn image_stats(doc: &Html) -> (usize, usize, Vec<String>) {
    let mut total = 0;
    let mut without_alt = 0;
    let mut alt_texts = Vec::new();

    for img in doc.select(&IMG) {
        total += 1;
        match img.value().attr("alt") {
            Some(alt) if !alt.is_empty() => alt_texts.push(alt.trim().to_string()),
            _ => without_alt += 1,
        }
    }

    (total, without_alt, alt_texts)
}

/// All document text outside scripts and styles, joined by spaces
fn visible_text(doc: &Html) -> String {
    let pieces = doc.root_element().descendants().filter_map(|node| {
        let piece = node.value().as_text()?;
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name()))
            .is_some_and(|name| HIDDEN_TEXT_PARENTS.contains(&name));
        if hidden { None } else { Some(&**piece) }
    });

    text::normalize_whitespace(&pieces.collect::<Vec<_>>().join(" "))
}

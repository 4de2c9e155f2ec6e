pub mod breadcrumbs;
pub mod html;
pub mod links;
pub mod text;

#[cfg(test)]
mod tests;

use scraper::ElementRef;

pub use links::{ClassifiedLinks, Link};

/// Raw on-page fields extracted from an HTML document
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    /// Lower-cased `robots` meta content; `None` when the tag is absent
    pub robots: Option<String>,
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub images_total: usize,
    pub images_without_alt: usize,
    pub alt_texts: Vec<String>,
    /// Visible document text, whitespace-normalized
    pub text: String,
    pub links: ClassifiedLinks,
    pub breadcrumbs: Vec<String>,
}

/// Trimmed text of an element, with its text nodes joined by single spaces
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

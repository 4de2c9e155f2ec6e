use crate::parsers::Link;
use crate::parsers::text::KeywordCounts;
use serde::Serialize;

/// Text of every heading level the audit looks at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderTags {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

impl HeaderTags {
    pub fn h1_count(&self) -> usize {
        self.h1.len()
    }

    pub fn h2_count(&self) -> usize {
        self.h2.len()
    }

    pub fn h3_count(&self) -> usize {
        self.h3.len()
    }
}

/// Image alt-text coverage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageStats {
    pub total: usize,
    pub without_alt: usize,
    pub alt_texts: Vec<String>,
}

/// Issues found on a page, grouped by the analyzer that raised them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageIssues {
    pub title_meta: Vec<String>,
    pub header: Vec<String>,
    pub url: Vec<String>,
    pub content: Vec<String>,
}

impl PageIssues {
    /// All issues in analyzer order
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.title_meta
            .iter()
            .chain(&self.header)
            .chain(&self.url)
            .chain(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Full analysis of one successfully fetched page
#[derive(Debug, Clone, Serialize)]
pub struct PageAudit {
    pub url: String,
    pub title: Option<String>,
    pub title_length: usize,
    pub meta_description: Option<String>,
    pub meta_description_length: usize,
    pub meta_keywords: Option<String>,
    /// Lower-cased robots directive
    pub robots: String,
    pub headers: HeaderTags,
    pub images: ImageStats,
    pub breadcrumbs: Vec<String>,
    pub internal_links: Vec<Link>,
    pub external_links: Vec<Link>,
    pub word_count: usize,
    pub keyword_density: KeywordCounts,
    pub top_keywords: Vec<(String, usize)>,
    pub url_depth: usize,
    pub url_length: usize,
    pub issues: PageIssues,
    pub recommendations: Vec<String>,
    pub score: u8,
}

/// Outcome of auditing one URL
///
/// Either the full analysis or the reason it could not be produced; never a
/// partially filled record.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageRecord {
    Success(Box<PageAudit>),
    Error { url: String, error: String },
}

impl PageRecord {
    pub fn url(&self) -> &str {
        match self {
            PageRecord::Success(audit) => &audit.url,
            PageRecord::Error { url, .. } => url,
        }
    }

    /// The analysis, if the page was audited successfully
    pub fn audit(&self) -> Option<&PageAudit> {
        match self {
            PageRecord::Success(audit) => Some(audit),
            PageRecord::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageRecord::Success(_) => None,
            PageRecord::Error { error, .. } => Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PageRecord::Error { .. })
    }
}

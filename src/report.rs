use crate::parsers::text::KeywordCounts;
use crate::results::{PageAudit, PageRecord};
use serde::Serialize;

const TOP_ISSUES: usize = 10;
const TOP_KEYWORDS: usize = 20;
const MAX_OPPORTUNITIES: usize = 10;

/// Site-wide statistics over the successfully audited pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_pages: usize,
    pub average_score: f64,
    /// Pages with at least one title/meta issue
    pub pages_with_issues: usize,
    pub average_word_count: f64,
    pub pages_missing_meta_desc: usize,
    pub pages_missing_h1: usize,
    /// Pages that could not be fetched or parsed
    pub pages_failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordAnalysis {
    pub top_keywords: Vec<(String, usize)>,
    pub total_unique_keywords: usize,
    /// Keywords seen exactly once across the crawl, in encounter order
    pub keyword_opportunities: Vec<String>,
}

/// Cross-page report built from the audited pages
///
/// Everything is empty (and `summary` is `None`) when no page was audited
/// successfully.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateReport {
    pub summary: Option<ReportSummary>,
    pub common_issues: Vec<(String, usize)>,
    pub keyword_analysis: KeywordAnalysis,
}

impl AggregateReport {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }
}

/// Summarize a crawl
pub fn generate(records: &[PageRecord]) -> AggregateReport {
    let valid: Vec<&PageAudit> = records.iter().filter_map(PageRecord::audit).collect();
    if valid.is_empty() {
        ::log::warn!("No valid pages to report on");
        return AggregateReport::default();
    }

    let count = valid.len();
    let summary = ReportSummary {
        total_pages: count,
        average_score: mean(valid.iter().map(|p| f64::from(p.score)), count),
        pages_with_issues: valid.iter().filter(|p| !p.issues.title_meta.is_empty()).count(),
        average_word_count: mean(valid.iter().map(|p| p.word_count as f64), count),
        pages_missing_meta_desc: valid.iter().filter(|p| p.meta_description.is_none()).count(),
        pages_missing_h1: valid.iter().filter(|p| p.headers.h1_count() == 0).count(),
        pages_failed: records.len() - count,
    };

    AggregateReport {
        summary: Some(summary),
        common_issues: common_issues(&valid),
        keyword_analysis: keyword_analysis(&valid),
    }
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count as f64
}

/// Every issue across every category, ranked by how many times it occurs
fn common_issues(pages: &[&PageAudit]) -> Vec<(String, usize)> {
    let mut tally = KeywordCounts::new();
    for issue in pages.iter().flat_map(|p| p.issues.iter()) {
        tally.add(issue, 1);
    }
    tally.most_common(TOP_ISSUES)
}

fn keyword_analysis(pages: &[&PageAudit]) -> KeywordAnalysis {
    let mut totals = KeywordCounts::new();
    for (keyword, count) in pages.iter().flat_map(|p| p.top_keywords.iter()) {
        totals.add(keyword, *count);
    }

    KeywordAnalysis {
        top_keywords: totals.most_common(TOP_KEYWORDS),
        total_unique_keywords: totals.len(),
        keyword_opportunities: totals
            .iter()
            .filter(|(_, count)| *count == 1)
            .map(|(keyword, _)| keyword.to_string())
            .take(MAX_OPPORTUNITIES)
            .collect(),
    }
}

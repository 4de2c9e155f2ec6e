use crate::report::AggregateReport;
use crate::results::PageRecord;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;
const DETAIL_RULE_WIDTH: usize = 60;

/// Site summary shown after a crawl
pub fn summary(report: &AggregateReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "SEO AUDIT SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    let Some(summary) = &report.summary else {
        let _ = writeln!(out, "No valid pages found to analyze");
        return out;
    };

    let _ = writeln!(out, "Total Pages Analyzed: {}", summary.total_pages);
    let _ = writeln!(out, "Average SEO Score: {:.1}/100", summary.average_score);
    let _ = writeln!(out, "Pages with Issues: {}", summary.pages_with_issues);
    let _ = writeln!(out, "Average Word Count: {:.0}", summary.average_word_count);
    if summary.pages_failed > 0 {
        let _ = writeln!(out, "Pages Failed: {}", summary.pages_failed);
    }

    if !report.common_issues.is_empty() {
        let _ = writeln!(out, "\nTop Issues Found:");
        for (issue, count) in report.common_issues.iter().take(5) {
            let _ = writeln!(out, "  - {}: {} pages", issue, count);
        }
    }

    let keywords = &report.keyword_analysis;
    if !keywords.top_keywords.is_empty() {
        let _ = writeln!(out, "\nTop Keywords:");
        for (keyword, count) in keywords.top_keywords.iter().take(10) {
            let _ = writeln!(out, "  - {}: {} occurrences", keyword, count);
        }
    }

    if !keywords.keyword_opportunities.is_empty() {
        let _ = writeln!(out, "\nKeyword Opportunities:");
        for keyword in keywords.keyword_opportunities.iter().take(5) {
            let _ = writeln!(out, "  - {}", keyword);
        }
    }

    out
}

/// Detailed view of a single page
///
/// `url` is looked up among `records`; when it is missing the available URLs
/// are listed instead.
pub fn page_detail(records: &[PageRecord], url: &str) -> String {
    let mut out = String::new();

    let Some(record) = records.iter().find(|r| r.url() == url) else {
        let _ = writeln!(out, "\nNo data found for URL: {}", url);
        let _ = writeln!(out, "Available URLs in the dataset:");
        for record in records.iter().take(10) {
            let _ = writeln!(out, "  - {}", record.url());
        }
        return out;
    };

    let audit = match record {
        PageRecord::Success(audit) => audit,
        PageRecord::Error { error, .. } => {
            let _ = writeln!(out, "\nError occurred while processing {}", url);
            let _ = writeln!(out, "Error: {}", error);
            return out;
        }
    };

    let _ = writeln!(out, "\nDETAILED PAGE REPORT: {}", url);
    let _ = writeln!(out, "{}", "=".repeat(DETAIL_RULE_WIDTH));
    let _ = writeln!(out, "SEO Score: {}/100", audit.score);
    let _ = writeln!(
        out,
        "Title: {} ({} chars)",
        audit.title.as_deref().unwrap_or("N/A"),
        audit.title_length
    );
    let _ = writeln!(
        out,
        "Meta Description: {} ({} chars)",
        audit.meta_description.as_deref().unwrap_or("N/A"),
        audit.meta_description_length
    );
    let _ = writeln!(out, "Word Count: {}", audit.word_count);
    let _ = writeln!(out, "Internal Links: {}", audit.internal_links.len());
    let _ = writeln!(out, "H1 Count: {}", audit.headers.h1_count());
    let _ = writeln!(out, "H2 Count: {}", audit.headers.h2_count());
    let _ = writeln!(out, "Images without Alt: {}", audit.images.without_alt);

    if !audit.issues.is_empty() {
        let issues: Vec<&str> = audit.issues.iter().map(String::as_str).collect();
        let _ = writeln!(out, "\nIssues Found: {}", issues.join(", "));
    }

    if !audit.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations:");
        for rec in &audit.recommendations {
            let _ = writeln!(out, "  - {}", rec);
        }
    }

    out
}

/// First successfully audited page, the default subject of the detail view
pub fn first_valid_url(records: &[PageRecord]) -> Option<&str> {
    records.iter().find(|r| !r.is_error()).map(PageRecord::url)
}

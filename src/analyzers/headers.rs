use super::{AnalysisResult, Metric};

pub const MISSING_H1: &str = "Missing H1 tag";
pub const MULTIPLE_H1: &str = "Multiple H1 tags";
pub const NO_HEADERS: &str = "No header tags found";

/// Check the heading structure of a page
pub fn analyze(h1: &[String], h2: &[String], h3: &[String]) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    match h1.len() {
        0 => result.issue(MISSING_H1),
        1 => {}
        _ => result.issue_with_fix(MULTIPLE_H1, "Use only one H1 tag per page"),
    }

    let total = h1.len() + h2.len() + h3.len();
    if total == 0 {
        result.issue(NO_HEADERS);
    } else if total < 3 {
        result.recommend("Add more header tags for better content structure");
    }

    result.set("h1_count", Metric::Count(h1.len()));
    result.set("h2_count", Metric::Count(h2.len()));
    result.set("h3_count", Metric::Count(h3.len()));
    result
}

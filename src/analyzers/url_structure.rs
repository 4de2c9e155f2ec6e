use super::{AnalysisResult, Metric};
use url::Url;

pub const TOO_DEEP: &str = "URL too deep";
pub const UNDERSCORES: &str = "Contains underscores";
pub const NOT_DESCRIPTIVE: &str = "No descriptive text in URL";
pub const TOO_LONG: &str = "URL too long";
pub const HAS_PARAMETERS: &str = "Contains URL parameters";

const MAX_DEPTH: usize = 4;
const MAX_LENGTH: usize = 100;

/// Number of non-empty path segments
pub fn path_depth(path: &str) -> usize {
    path.split('/').filter(|segment| !segment.is_empty()).count()
}

/// Path exactly as written: after `scheme://authority`, before any `?` or `#`
///
/// No percent-encoding or dot-segment resolution is applied.
pub fn raw_path(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(i) => {
            let after = &url[i + 3..];
            let start = after.find(['/', '?', '#']).unwrap_or(after.len());
            &after[start..]
        }
        None => url,
    };
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

/// Check the shape of a page URL
///
/// Path checks run on the path as written. The query check needs a parsable
/// URL; one that does not parse has no query string.
pub fn analyze(url: &str) -> AnalysisResult {
    let mut result = AnalysisResult::default();
    let path = raw_path(url);
    let has_query = Url::parse(url)
        .ok()
        .and_then(|u| u.query().map(|q| !q.is_empty()))
        .unwrap_or(false);

    let depth = path_depth(path);
    let length = url.chars().count();

    if depth > MAX_DEPTH {
        result.issue_with_fix(TOO_DEEP, "Reduce URL depth to 3 levels or less");
    }
    if path.contains('_') {
        result.issue_with_fix(UNDERSCORES, "Replace underscores with hyphens");
    }
    if !path.chars().any(|c| c.is_ascii_alphabetic()) {
        result.issue_with_fix(NOT_DESCRIPTIVE, "Add descriptive keywords to URL");
    }
    if length > MAX_LENGTH {
        result.issue_with_fix(TOO_LONG, "Shorten URL to under 100 characters");
    }
    if has_query {
        result.issue(HAS_PARAMETERS);
    }

    let score = if result.issues.is_empty() {
        "Good"
    } else {
        "Needs Improvement"
    };

    result.set("depth", Metric::Count(depth));
    result.set("length", Metric::Count(length));
    result.set("score", Metric::Label(score));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_depth() {
        assert_eq!(path_depth(""), 0);
        assert_eq!(path_depth("/"), 0);
        assert_eq!(path_depth("/blog"), 1);
        assert_eq!(path_depth("/blog/2024/post/"), 3);
        assert_eq!(path_depth("/a//b"), 2);
    }

    #[test]
    fn test_raw_path() {
        assert_eq!(raw_path("https://example.com"), "");
        assert_eq!(raw_path("https://example.com/€/100?x=1#top"), "/€/100");
        assert_eq!(raw_path("https://example.com/a/../b_c"), "/a/../b_c");
        assert_eq!(raw_path("https://example.com?q=1"), "");
        assert_eq!(raw_path("not a url"), "not a url");
    }

    #[test]
    fn test_non_ascii_path_is_not_descriptive() {
        let result = analyze("https://example.com/€/100");
        assert!(result.has_issue(NOT_DESCRIPTIVE));
        assert_eq!(result.count("depth"), Some(2));
    }

    #[test]
    fn test_checks_use_path_as_written() {
        // Dot segments are not resolved away before counting
        let result = analyze("https://example.com/a/b/c/d/../e");
        assert!(result.has_issue(TOO_DEEP));
        assert_eq!(result.count("depth"), Some(6));

        let result = analyze("https://example.com/a//b");
        assert_eq!(result.count("depth"), Some(2));
    }

    #[test]
    fn test_clean_url_is_good() {
        let result = analyze("https://example.com/blog/seo-basics");
        assert!(result.issues.is_empty());
        assert_eq!(result.label("score"), Some("Good"));
        assert_eq!(result.count("depth"), Some(2));
    }

    #[test]
    fn test_homepage_has_no_descriptive_text() {
        let result = analyze("https://example.com/");
        assert_eq!(result.issues, vec![NOT_DESCRIPTIVE]);
        assert_eq!(result.count("depth"), Some(0));
        assert_eq!(result.label("score"), Some("Needs Improvement"));
    }

    #[test]
    fn test_depth_limit() {
        let four = analyze("https://example.com/a/b/c/d");
        assert!(!four.has_issue(TOO_DEEP));

        let five = analyze("https://example.com/a/b/c/d/e");
        assert!(five.has_issue(TOO_DEEP));
        assert!(five
            .recommendations
            .contains(&"Reduce URL depth to 3 levels or less".to_string()));
    }

    #[test]
    fn test_underscores_and_parameters() {
        let result = analyze("https://example.com/my_page?id=7");
        assert_eq!(result.issues, vec![UNDERSCORES, HAS_PARAMETERS]);
        // Parameters carry no recommendation
        assert_eq!(result.recommendations, vec!["Replace underscores with hyphens"]);
    }

    #[test]
    fn test_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(90));
        let result = analyze(&url);
        assert!(result.has_issue(TOO_LONG));
        assert_eq!(result.count("length"), Some(url.len()));
    }
}

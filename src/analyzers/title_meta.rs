use super::{AnalysisResult, Metric};

pub const MISSING_TITLE: &str = "Missing title tag";
pub const TITLE_TOO_SHORT: &str = "Title too short";
pub const TITLE_TOO_LONG: &str = "Title too long";
pub const DUPLICATE_TITLE_WORDS: &str = "Duplicate words in title";
pub const MISSING_META_DESCRIPTION: &str = "Missing meta description";
pub const META_DESCRIPTION_TOO_SHORT: &str = "Meta description too short";
pub const META_DESCRIPTION_TOO_LONG: &str = "Meta description too long";

const TITLE_MIN: usize = 30;
const TITLE_MAX: usize = 60;
const META_DESCRIPTION_MIN: usize = 120;
const META_DESCRIPTION_MAX: usize = 160;

/// Check title and meta description lengths and title wording
///
/// Blank values are treated as missing. `_url` is accepted for context only.
pub fn analyze(title: Option<&str>, meta_description: Option<&str>, _url: &str) -> AnalysisResult {
    let mut result = AnalysisResult::default();
    let title = title.filter(|t| !t.trim().is_empty());
    let meta_description = meta_description.filter(|m| !m.trim().is_empty());

    let title_length = title.map_or(0, |t| t.chars().count());
    match title {
        None => result.issue(MISSING_TITLE),
        Some(title) => {
            if title_length < TITLE_MIN {
                result.issue_with_fix(TITLE_TOO_SHORT, "Expand title to 50-60 characters");
            } else if title_length > TITLE_MAX {
                result.issue_with_fix(TITLE_TOO_LONG, "Shorten title to under 60 characters");
            }

            if has_duplicate_words(title) {
                result.issue(DUPLICATE_TITLE_WORDS);
            }
        }
    }

    let meta_length = meta_description.map_or(0, |m| m.chars().count());
    match meta_description {
        None => result.issue(MISSING_META_DESCRIPTION),
        Some(_) if meta_length < META_DESCRIPTION_MIN => result.issue_with_fix(
            META_DESCRIPTION_TOO_SHORT,
            "Expand meta description to 150-160 characters",
        ),
        Some(_) if meta_length > META_DESCRIPTION_MAX => result.issue_with_fix(
            META_DESCRIPTION_TOO_LONG,
            "Shorten meta description to under 160 characters",
        ),
        Some(_) => {}
    }

    result.set("title_length", Metric::Count(title_length));
    result.set("meta_description_length", Metric::Count(meta_length));
    result
}

fn has_duplicate_words(title: &str) -> bool {
    let lowered = title.to_lowercase();
    let mut seen = std::collections::HashSet::new();
    lowered.split_whitespace().any(|word| !seen.insert(word))
}

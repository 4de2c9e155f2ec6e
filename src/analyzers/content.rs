use super::{AnalysisResult, Metric};
use crate::parsers::text::{self, KeywordCounts};

pub const TOO_SHORT: &str = "Content too short";
pub const KEYWORD_STUFFING: &str = "Keyword over-optimization";

const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 3000;
/// Highest acceptable share of the top keyword, in percent
const MAX_KEYWORD_SHARE: f64 = 3.0;
const MAX_WORDS_PER_SENTENCE: f64 = 20.0;

/// Check body length, keyword stuffing and sentence length
///
/// The keyword share is the top keyword's count over the raw word count, not
/// over the number of extracted keywords.
pub fn analyze(word_count: usize, keywords: &KeywordCounts, page_text: &str) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    if word_count < MIN_WORDS {
        result.issue_with_fix(TOO_SHORT, "Expand content to at least 300 words");
    } else if word_count > MAX_WORDS {
        result.recommend("Consider breaking long content into multiple pages");
    }

    if let Some(top) = keywords.max_count().filter(|_| word_count > 0) {
        let share = top as f64 / word_count as f64 * 100.0;
        if share > MAX_KEYWORD_SHARE {
            result.issue_with_fix(KEYWORD_STUFFING, "Reduce keyword density to 2-3%");
        }
    }

    let sentences = text::sentence_count(page_text);
    if sentences > 0 && word_count as f64 / sentences as f64 > MAX_WORDS_PER_SENTENCE {
        result.recommend("Consider shorter sentences for better readability");
    }

    let readability = if word_count >= MIN_WORDS { "Good" } else { "Poor" };
    result.set("word_count", Metric::Count(word_count));
    result.set("readability_score", Metric::Label(readability));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::text::{KeywordOptions, extract_keywords, sample_prose as prose, word_count};

    #[test]
    fn test_short_content() {
        let text = prose(5, 10);
        let keywords = KeywordCounts::new();
        let result = analyze(word_count(&text), &keywords, &text);
        assert_eq!(result.issues, vec![TOO_SHORT]);
        assert_eq!(result.label("readability_score"), Some("Poor"));
    }

    #[test]
    fn test_long_content_is_recommendation_only() {
        let text = prose(310, 10);
        let keywords = KeywordCounts::new();
        let result = analyze(3100, &keywords, &text);
        assert!(result.issues.is_empty());
        assert!(result
            .recommendations
            .contains(&"Consider breaking long content into multiple pages".to_string()));
        assert_eq!(result.label("readability_score"), Some("Good"));
    }

    #[test]
    fn test_keyword_over_optimization() {
        let mut keywords = KeywordCounts::new();
        keywords.add("widget", 31);
        let text = prose(100, 10);
        let result = analyze(1000, &keywords, &text);
        assert_eq!(result.issues, vec![KEYWORD_STUFFING]);

        let mut keywords = KeywordCounts::new();
        keywords.add("widget", 30);
        let result = analyze(1000, &keywords, &text);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_long_sentences() {
        let text = prose(20, 25);
        let keywords = extract_keywords(&text, &KeywordOptions::default());
        let result = analyze(word_count(&text), &keywords, &text);
        assert!(result
            .recommendations
            .contains(&"Consider shorter sentences for better readability".to_string()));
    }

    #[test]
    fn test_readable_content_has_no_findings() {
        let text = prose(150, 10);
        let keywords = extract_keywords(&text, &KeywordOptions::default());
        let result = analyze(word_count(&text), &keywords, &text);
        assert!(result.issues.is_empty(), "{:?}", result.issues);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.count("word_count"), Some(1500));
    }
}

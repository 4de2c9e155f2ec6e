use super::AnalysisResult;

const TITLE_META_PENALTY: i64 = 10;
const HEADER_PENALTY: i64 = 10;
const URL_PENALTY: i64 = 5;
const CONTENT_PENALTY: i64 = 10;
const MISSING_ALT_PENALTY: i64 = 2;
const MISSING_ALT_CAP: i64 = 20;
const INTERNAL_LINK_BONUS: i64 = 5;
const INTERNAL_LINK_THRESHOLD: usize = 3;

/// Findings from the four analyzers of one page
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub title_meta: &'a AnalysisResult,
    pub headers: &'a AnalysisResult,
    pub url: &'a AnalysisResult,
    pub content: &'a AnalysisResult,
    pub internal_links: usize,
    pub images_without_alt: usize,
}

/// Combine analyzer findings into a 0-100 page score
pub fn calculate(inputs: &ScoreInputs) -> u8 {
    let deduct = |result: &AnalysisResult, per_issue: i64| {
        i64::try_from(result.issues.len()).unwrap_or(i64::MAX / 2).saturating_mul(per_issue)
    };

    let alt_penalty = i64::try_from(inputs.images_without_alt)
        .unwrap_or(i64::MAX / 2)
        .saturating_mul(MISSING_ALT_PENALTY)
        .min(MISSING_ALT_CAP);

    let mut score: i64 = 100;
    score = score.saturating_sub(deduct(inputs.title_meta, TITLE_META_PENALTY));
    score = score.saturating_sub(deduct(inputs.headers, HEADER_PENALTY));
    score = score.saturating_sub(deduct(inputs.url, URL_PENALTY));
    score = score.saturating_sub(deduct(inputs.content, CONTENT_PENALTY));
    score = score.saturating_sub(alt_penalty);

    if inputs.internal_links >= INTERNAL_LINK_THRESHOLD {
        score += INTERNAL_LINK_BONUS;
    }

    score.clamp(0, 100) as u8
}

use crate::analyzers::{content, headers, score, title_meta, url_structure};
use crate::config::AuditConfig;
use crate::crawlers::crawler::{FetchError, Fetcher};
use crate::parsers::{self, text};
use crate::results::{HeaderTags, ImageStats, PageAudit, PageIssues, PageRecord};
use url::Url;

const DEFAULT_ROBOTS: &str = "index,follow";
const TOP_KEYWORDS: usize = 10;

/// Why a page could not be audited
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid page URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Fetch and audit a single page
///
/// Failures never escape: they are logged and returned as an error record.
pub async fn audit_page<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    config: &AuditConfig,
) -> PageRecord {
    let outcome = match fetcher.fetch(url, config.page_timeout()).await {
        Ok(response) => analyze_html(url, &response.body, config),
        Err(e) => Err(AuditError::from(e)),
    };

    match outcome {
        Ok(audit) => {
            ::log::debug!("Audited {} with score {}", url, audit.score);
            PageRecord::Success(Box::new(audit))
        }
        Err(e) => {
            ::log::warn!("Error processing {}: {}", url, e);
            PageRecord::Error {
                url: url.to_string(),
                error: e.to_string(),
            }
        }
    }
}

/// Extract every on-page signal from `html` and run the analyzers over it
pub fn analyze_html(url: &str, html: &str, config: &AuditConfig) -> Result<PageAudit, AuditError> {
    let page_url = Url::parse(url).map_err(|source| AuditError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let page = parsers::html::parse(html, &page_url);

    let word_count = text::word_count(&page.text);
    let keyword_density = text::extract_keywords(&page.text, &config.keyword_options());
    let top_keywords = keyword_density.most_common(TOP_KEYWORDS);

    let title_meta = title_meta::analyze(
        page.title.as_deref(),
        page.meta_description.as_deref(),
        url,
    );
    let header = headers::analyze(&page.h1, &page.h2, &page.h3);
    let url_shape = url_structure::analyze(url);
    let body = content::analyze(word_count, &keyword_density, &page.text);

    let score = score::calculate(&score::ScoreInputs {
        title_meta: &title_meta,
        headers: &header,
        url: &url_shape,
        content: &body,
        internal_links: page.links.internal.len(),
        images_without_alt: page.images_without_alt,
    });

    let recommendations = [&title_meta, &header, &url_shape, &body]
        .iter()
        .flat_map(|result| result.recommendations.iter().cloned())
        .collect();

    Ok(PageAudit {
        url: url.to_string(),
        title_length: title_meta.count("title_length").unwrap_or_default(),
        meta_description_length: title_meta
            .count("meta_description_length")
            .unwrap_or_default(),
        title: page.title,
        meta_description: page.meta_description,
        meta_keywords: page.meta_keywords,
        robots: page.robots.unwrap_or_else(|| DEFAULT_ROBOTS.to_string()),
        headers: HeaderTags {
            h1: page.h1,
            h2: page.h2,
            h3: page.h3,
        },
        images: ImageStats {
            total: page.images_total,
            without_alt: page.images_without_alt,
            alt_texts: page.alt_texts,
        },
        breadcrumbs: page.breadcrumbs,
        internal_links: page.links.internal,
        external_links: page.links.external,
        word_count,
        keyword_density,
        top_keywords,
        url_depth: url_shape.count("depth").unwrap_or_default(),
        url_length: url_shape.count("length").unwrap_or_default(),
        issues: PageIssues {
            title_meta: title_meta.issues,
            header: header.issues,
            url: url_shape.issues,
            content: body.issues,
        },
        recommendations,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::headers::MISSING_H1;
    use crate::analyzers::title_meta::MISSING_META_DESCRIPTION;
    use crate::crawlers::mock::StaticFetcher;
    use crate::parsers::text::sample_prose;

    fn config() -> AuditConfig {
        AuditConfig::new("example.com")
    }

    #[test]
    fn test_missing_h1_and_meta_scores_80() {
        let html = format!(
            r#"<html><head><title>Handmade oak furniture built to last decades</title></head>
            <body><h2>Workshop</h2><h2>Materials</h2><h3>Finish</h3><p>{}</p></body></html>"#,
            sample_prose(150, 10)
        );
        let audit = analyze_html("https://example.com/oak-tables", &html, &config()).unwrap();

        // Title and headings add 10 words on top of the body
        assert_eq!(audit.word_count, 1510);
        assert!(audit.internal_links.is_empty());
        assert_eq!(audit.issues.title_meta, vec![MISSING_META_DESCRIPTION]);
        assert_eq!(audit.issues.header, vec![MISSING_H1]);
        assert!(audit.issues.url.is_empty());
        assert!(audit.issues.content.is_empty());
        assert_eq!(audit.score, 80);
    }

    #[test]
    fn test_extracts_raw_fields() {
        let html = r##"<html><head>
            <title> Oak Tables </title>
            <meta name="description" content="  Solid oak tables.  ">
            <meta name="keywords" content="oak, tables">
            <meta name="robots" content="NOINDEX, Follow">
            <script>var hidden = "scripted words here";</script>
            </head><body>
            <h1>Oak <em>Tables</em></h1>
            <img src="a.png" alt="Oak table"><img src="b.png"><img src="c.png" alt="">
            <a href="/about" title="About us">About</a>
            <a href="https://other.org/x">Elsewhere</a>
            <a href="#top">Top</a>
            </body></html>"##;
        let audit = analyze_html("https://example.com/tables", html, &config()).unwrap();

        assert_eq!(audit.title.as_deref(), Some("Oak Tables"));
        assert_eq!(audit.title_length, 10);
        assert_eq!(audit.meta_description.as_deref(), Some("Solid oak tables."));
        assert_eq!(audit.meta_keywords.as_deref(), Some("oak, tables"));
        assert_eq!(audit.robots, "noindex, follow");
        assert_eq!(audit.headers.h1, vec!["Oak Tables"]);
        assert_eq!(audit.images.total, 3);
        assert_eq!(audit.images.without_alt, 2);
        assert_eq!(audit.images.alt_texts, vec!["Oak table"]);
        assert_eq!(audit.internal_links.len(), 1);
        assert_eq!(audit.internal_links[0].url, "https://example.com/about");
        assert_eq!(audit.internal_links[0].title.as_deref(), Some("About us"));
        assert_eq!(audit.external_links.len(), 1);
        assert_eq!(audit.keyword_density.get("scripted"), None);
        assert_eq!(audit.keyword_density.get("tables"), Some(2));
    }

    #[test]
    fn test_empty_robots_tag_overrides_default() {
        let html = r#"<head><meta name="robots" content="  "></head><p>hi</p>"#;
        let audit = analyze_html("https://example.com/x", html, &config()).unwrap();
        assert_eq!(audit.robots, "");
    }

    #[test]
    fn test_defaults_when_tags_absent() {
        let audit = analyze_html("https://example.com/x", "<p>hi</p>", &config()).unwrap();
        assert_eq!(audit.title, None);
        assert_eq!(audit.meta_description, None);
        assert_eq!(audit.robots, "index,follow");
        assert!(audit.breadcrumbs.is_empty());
    }

    #[test]
    fn test_recommendations_follow_analyzer_order() {
        let audit = analyze_html(
            "https://example.com/my_page",
            "<title>Short</title><h1>One</h1>",
            &config(),
        )
        .unwrap();
        assert_eq!(
            audit.recommendations,
            vec![
                "Expand title to 50-60 characters",
                "Add more header tags for better content structure",
                "Replace underscores with hyphens",
                "Expand content to at least 300 words",
                "Reduce keyword density to 2-3%",
            ]
        );
    }

    #[test]
    fn test_invalid_url_is_an_error() {
        let result = analyze_html("not a url", "<html></html>", &config());
        assert!(matches!(result, Err(AuditError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_error_record() {
        let fetcher = StaticFetcher::new().fail(
            "https://example.com/down",
            FetchError::Network("connection refused".to_string()),
        );
        let record = audit_page(&fetcher, "https://example.com/down", &config()).await;

        assert!(record.is_error());
        assert_eq!(record.url(), "https://example.com/down");
        assert!(record.audit().is_none());
        assert!(record.error().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_successful_fetch_is_audited() {
        let fetcher =
            StaticFetcher::new().html("https://example.com/ok", "<title>Fine</title><h1>Hi</h1>");
        let record = audit_page(&fetcher, "https://example.com/ok", &config()).await;
        assert_eq!(record.audit().unwrap().headers.h1_count(), 1);
    }
}

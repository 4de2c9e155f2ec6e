use crate::parsers::html;
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>
    Handmade Oak Furniture
  </title>
  <meta name="description" content="  Solid oak tables and chairs, built to order.  ">
  <meta name="keywords" content="oak, furniture">
  <meta name="robots" content="NOINDEX, Follow">
  <style>.hero { color: red; }</style>
  <script>var tracking = "secret";</script>
</head>
<body>
  <h1>Oak <em>Tables</em></h1>
  <h2>Dining</h2>
  <h2>Coffee</h2>
  <h3>Finishes</h3>
  <img src="a.jpg" alt="Oak table">
  <img src="b.jpg" alt="">
  <img src="c.jpg">
  <p>Every   table is
     finished by hand.</p>
  <noscript>Enable scripts</noscript>
</body>
</html>"#;

    fn parse(html: &str) -> crate::parsers::ParsedPage {
        html::parse(html, &Url::parse("https://example.com/oak").unwrap())
    }

    #[test]
    fn test_head_fields() {
        let page = parse(ARTICLE);
        assert_eq!(page.title.as_deref(), Some("Handmade Oak Furniture"));
        assert_eq!(
            page.meta_description.as_deref(),
            Some("Solid oak tables and chairs, built to order.")
        );
        assert_eq!(page.meta_keywords.as_deref(), Some("oak, furniture"));
        assert_eq!(page.robots.as_deref(), Some("noindex, follow"));
    }

    #[test]
    fn test_headings_and_images() {
        let page = parse(ARTICLE);
        assert_eq!(page.h1, vec!["Oak Tables"]);
        assert_eq!(page.h2, vec!["Dining", "Coffee"]);
        assert_eq!(page.h3, vec!["Finishes"]);
        assert_eq!(page.images_total, 3);
        assert_eq!(page.images_without_alt, 2);
        assert_eq!(page.alt_texts, vec!["Oak table"]);
    }

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let page = parse(ARTICLE);
        assert!(page.text.starts_with("Handmade Oak Furniture"));
        assert!(page.text.contains("Every table is finished by hand."));
        assert!(!page.text.contains("tracking"));
        assert!(!page.text.contains("color"));
        assert!(!page.text.contains("Enable scripts"));
        assert!(!page.text.contains("  "));
    }

    #[test]
    fn test_missing_and_empty_tags() {
        let page = parse(r#"<html><head><title>  </title><meta name="description" content=""></head><body></body></html>"#);
        assert_eq!(page.title, None);
        assert_eq!(page.meta_description, None);
        assert_eq!(page.meta_keywords, None);
        assert_eq!(page.robots, None);
        assert!(page.h1.is_empty());
        assert_eq!(page.images_total, 0);
        assert!(page.text.is_empty());
    }

    #[test]
    fn test_empty_robots_tag_is_kept() {
        let page = parse(r#"<head><meta name="robots" content=""></head>"#);
        assert_eq!(page.robots.as_deref(), Some(""));

        let page = parse(r#"<head><meta name="robots"></head>"#);
        assert_eq!(page.robots.as_deref(), Some(""));
    }

    #[test]
    fn test_first_title_wins() {
        let page = parse("<title>First</title><title>Second</title>");
        assert_eq!(page.title.as_deref(), Some("First"));
    }
}

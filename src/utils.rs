/// Prepend `https://` to a bare domain; URLs with a scheme pass through unchanged
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    }
}

/// Build an absolute URL for a path at the site root
pub fn site_url(domain: &str, path: &str) -> String {
    format!("{}/{}", homepage(domain), path.trim_start_matches('/'))
}

/// The homepage URL used when no sitemap is available
pub fn homepage(domain: &str) -> String {
    domain.trim_end_matches('/').to_string()
}

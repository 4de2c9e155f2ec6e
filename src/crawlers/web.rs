use crate::auditor;
use crate::config::AuditConfig;
use crate::crawlers::crawler::{FetchError, Fetcher};
use crate::crawlers::sitemap;
use crate::results::PageRecord;
use crate::utils;

/// What the robots.txt check found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsStatus {
    Found,
    NotFound(u16),
    Unreachable(String),
}

/// Audits a whole site: robots.txt check, sitemap discovery, then every page in turn.
///
/// Pages are audited sequentially with the configured delay between them.
/// Per-page failures end up as error records; this never fails as a whole.
pub async fn crawl<F: Fetcher + ?Sized>(fetcher: &F, config: &AuditConfig) -> Vec<PageRecord> {
    let domain = utils::normalize_domain(&config.domain);
    ::log::info!("Starting SEO audit for {}", domain);

    check_robots(fetcher, &domain, config).await;
    let urls = discover_urls(fetcher, &domain, config).await;
    audit_pages(fetcher, &urls, config).await
}

/// Check whether the site serves a robots.txt
///
/// Only presence is reported; its rules are not applied.
pub async fn check_robots<F: Fetcher + ?Sized>(
    fetcher: &F,
    domain: &str,
    config: &AuditConfig,
) -> RobotsStatus {
    let robots_url = utils::site_url(domain, "robots.txt");

    let status = match fetcher.fetch(&robots_url, config.robots_timeout()).await {
        Ok(_) => RobotsStatus::Found,
        Err(FetchError::Status(code)) => RobotsStatus::NotFound(code),
        Err(e) => RobotsStatus::Unreachable(e.to_string()),
    };

    match &status {
        RobotsStatus::Found => ::log::info!("Robots.txt found"),
        RobotsStatus::NotFound(code) => ::log::warn!("Robots.txt not found (HTTP {})", code),
        RobotsStatus::Unreachable(e) => ::log::warn!("Could not check robots.txt: {}", e),
    }

    status
}

/// Page URLs to audit: the sitemap's, or just the homepage if it yields none
pub async fn discover_urls<F: Fetcher + ?Sized>(
    fetcher: &F,
    domain: &str,
    config: &AuditConfig,
) -> Vec<String> {
    let sitemap_url = utils::site_url(domain, "sitemap.xml");
    let mut urls = sitemap::discover_page_urls(fetcher, &sitemap_url, config).await;

    if urls.is_empty() {
        ::log::warn!("No sitemap found or sitemap empty, using homepage only");
        urls.push(utils::homepage(domain));
    }

    ::log::info!("Found {} URLs to audit", urls.len());
    urls
}

/// Audit up to `max_pages` of `urls` in order
pub async fn audit_pages<F: Fetcher + ?Sized>(
    fetcher: &F,
    urls: &[String],
    config: &AuditConfig,
) -> Vec<PageRecord> {
    let total = urls.len().min(config.max_pages);
    let delay = config.request_delay();
    let mut records = Vec::with_capacity(total);

    for (i, url) in urls.iter().take(total).enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        ::log::info!("Auditing ({}/{}): {}", i + 1, total, url);
        records.push(auditor::audit_page(fetcher, url, config).await);
    }

    let failed = records.iter().filter(|r| r.is_error()).count();
    ::log::info!(
        "Audit complete - {} pages, {} failed",
        records.len(),
        failed
    );

    records
}

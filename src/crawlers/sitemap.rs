use crate::config::AuditConfig;
use crate::crawlers::crawler::Fetcher;
use ::sitemap::reader::{SiteMapEntity, SiteMapReader};
use std::collections::HashSet;
use std::io::Cursor;

/// `<loc>` entries of one sitemap document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapEntries {
    /// Page URLs from `<url><loc>`
    pub urls: Vec<String>,
    /// Nested sitemap URLs from `<sitemap><loc>`; non-empty means this is an index
    pub sitemaps: Vec<String>,
}

impl SitemapEntries {
    pub fn is_index(&self) -> bool {
        !self.sitemaps.is_empty()
    }
}

/// Parse a sitemap or sitemap index document
///
/// Parsing stops at the first XML error; entries read before it are kept.
/// Locations are normalized by the URL parser, and entries whose `<loc>` is
/// missing, not a URL, or wrapped in CDATA are skipped with a warning.
pub fn parse_sitemap(xml: &[u8]) -> SitemapEntries {
    let mut entries = SitemapEntries::default();

    for entity in SiteMapReader::new(Cursor::new(xml)) {
        match entity {
            SiteMapEntity::Url(entry) => match entry.loc.get_url() {
                Some(url) => entries.urls.push(url.to_string()),
                None => ::log::warn!("Skipping <url> entry without a usable <loc>: {:?}", entry.loc),
            },
            SiteMapEntity::SiteMap(entry) => match entry.loc.get_url() {
                Some(url) => entries.sitemaps.push(url.to_string()),
                None => {
                    ::log::warn!("Skipping <sitemap> entry without a usable <loc>: {:?}", entry.loc)
                }
            },
            SiteMapEntity::Err(e) => {
                ::log::warn!("Malformed sitemap XML: {:?}", e);
                break;
            }
        }
    }

    entries
}

/// Collect page URLs reachable from `sitemap_url`, at most `max_pages` of them
///
/// Sitemap indexes are followed depth-first in document order. Every failure
/// (fetch error, non-XML response, repeated or too deeply nested sitemap)
/// contributes nothing and is only logged.
pub async fn discover_page_urls<F: Fetcher + ?Sized>(
    fetcher: &F,
    sitemap_url: &str,
    config: &AuditConfig,
) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut urls = resolve(fetcher, sitemap_url, config, 0, &mut visited).await;
    urls.truncate(config.max_pages);
    urls
}

async fn resolve<F: Fetcher + ?Sized>(
    fetcher: &F,
    sitemap_url: &str,
    config: &AuditConfig,
    depth: usize,
    visited: &mut HashSet<String>,
) -> Vec<String> {
    if !visited.insert(sitemap_url.to_string()) {
        ::log::warn!("Skipping already visited sitemap {}", sitemap_url);
        return Vec::new();
    }
    if depth > config.max_sitemap_depth {
        ::log::warn!(
            "Skipping sitemap {}: nested deeper than {} levels",
            sitemap_url,
            config.max_sitemap_depth
        );
        return Vec::new();
    }

    let response = match fetcher.fetch(sitemap_url, config.sitemap_timeout()).await {
        Ok(response) => response,
        Err(e) => {
            ::log::warn!("Error fetching sitemap {}: {}", sitemap_url, e);
            return Vec::new();
        }
    };

    if !response.is_xml() {
        ::log::warn!(
            "Sitemap {} is not XML (content type {:?})",
            sitemap_url,
            response.content_type
        );
        return Vec::new();
    }

    let entries = parse_sitemap(response.body.as_bytes());
    let mut page_urls = if entries.is_index() {
        ::log::info!(
            "Sitemap index {} lists {} sitemaps",
            sitemap_url,
            entries.sitemaps.len()
        );
        let mut collected = Vec::new();
        for child in &entries.sitemaps {
            if collected.len() >= config.max_pages {
                break;
            }
            let nested = Box::pin(resolve(fetcher, child, config, depth + 1, visited)).await;
            collected.extend(nested);
        }
        collected
    } else {
        entries.urls
    };

    ::log::debug!("Sitemap {} yielded {} URLs", sitemap_url, page_urls.len());
    page_urls.truncate(config.max_pages);
    page_urls
}

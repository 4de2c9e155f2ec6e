use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use crate::parsers::text::KeywordOptions;

/// Configuration for a site audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Domain or URL to audit
    pub domain: String,

    /// Maximum number of pages to audit
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Timeout for page fetches
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Timeout for sitemap fetches
    #[serde(default = "default_sitemap_timeout_secs")]
    pub sitemap_timeout_secs: u64,

    /// Timeout for the robots.txt check
    #[serde(default = "default_robots_timeout_secs")]
    pub robots_timeout_secs: u64,

    /// Delay between successive page audits
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Shortest token counted as a keyword
    #[serde(default = "default_keyword_min_length")]
    pub keyword_min_length: usize,

    /// Longest token counted as a keyword
    #[serde(default = "default_keyword_max_length")]
    pub keyword_max_length: usize,

    /// How deep sitemap indexes may nest before they are ignored
    #[serde(default = "default_max_sitemap_depth")]
    pub max_sitemap_depth: usize,
}

/// Default value for max_pages
fn default_max_pages() -> usize {
    10
}

fn default_page_timeout_secs() -> u64 {
    15
}

fn default_sitemap_timeout_secs() -> u64 {
    30
}

fn default_robots_timeout_secs() -> u64 {
    10
}

/// One second between pages
fn default_request_delay_ms() -> u64 {
    1000
}

/// Default value for user_agent (a desktop Chrome string)
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_keyword_min_length() -> usize {
    4
}

fn default_keyword_max_length() -> usize {
    20
}

fn default_max_sitemap_depth() -> usize {
    5
}

impl AuditConfig {
    /// Create a new configuration with default values
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            max_pages: default_max_pages(),
            page_timeout_secs: default_page_timeout_secs(),
            sitemap_timeout_secs: default_sitemap_timeout_secs(),
            robots_timeout_secs: default_robots_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
            user_agent: default_user_agent(),
            keyword_min_length: default_keyword_min_length(),
            keyword_max_length: default_keyword_max_length(),
            max_sitemap_depth: default_max_sitemap_depth(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn sitemap_timeout(&self) -> Duration {
        Duration::from_secs(self.sitemap_timeout_secs)
    }

    pub fn robots_timeout(&self) -> Duration {
        Duration::from_secs(self.robots_timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Keyword extraction bounds derived from this configuration
    pub fn keyword_options(&self) -> KeywordOptions {
        KeywordOptions {
            min_length: self.keyword_min_length,
            max_length: self.keyword_max_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_defaults() {
        let config = AuditConfig::from_json(r#"{"domain": "example.com"}"#).unwrap();
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.page_timeout(), Duration::from_secs(15));
        assert_eq!(config.sitemap_timeout(), Duration::from_secs(30));
        assert_eq!(config.robots_timeout(), Duration::from_secs(10));
        assert_eq!(config.request_delay(), Duration::from_millis(1000));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.max_sitemap_depth, 5);
    }

    #[test]
    fn test_from_json_overrides() {
        let config = AuditConfig::from_json(
            r#"{"domain": "example.com", "max_pages": 3, "request_delay_ms": 0, "keyword_min_length": 5}"#,
        )
        .unwrap();
        assert_eq!(config.max_pages, 3);
        assert_eq!(config.request_delay(), Duration::ZERO);
        assert_eq!(config.keyword_options().min_length, 5);
        assert_eq!(config.keyword_options().max_length, 20);
    }

    #[test]
    fn test_missing_domain_is_rejected() {
        assert!(AuditConfig::from_json(r#"{"max_pages": 3}"#).is_err());
    }
}

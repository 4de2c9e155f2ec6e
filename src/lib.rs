pub mod analyzers;
pub mod auditor;
pub mod config;
pub mod crawlers;
pub mod export;
pub mod parsers;
pub mod render;
pub mod report;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AuditConfig;
pub use report::AggregateReport;
pub use results::{PageAudit, PageRecord};

use crawlers::{Fetcher, HttpFetcher};
use std::time::Duration;

/// Everything a site audit produces
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    /// One record per audited URL, in crawl order
    pub records: Vec<PageRecord>,
    pub report: AggregateReport,
}

/// Main builder for a site audit
pub struct Audit {
    config: AuditConfig,
}

impl Audit {
    /// Create a new Audit builder for the given domain with default settings
    pub fn new(domain: &str) -> Self {
        Self {
            config: AuditConfig::new(domain),
        }
    }

    /// Set the maximum number of pages to audit
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set the pause between successive page audits
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.config.request_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Replace the configuration, keeping the builder's domain when the
    /// configuration leaves it empty
    pub fn with_config(mut self, mut config: AuditConfig) -> Self {
        if config.domain.trim().is_empty() {
            config.domain = std::mem::take(&mut self.config.domain);
        }
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = AuditConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = AuditConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Run the audit over HTTP
    pub async fn run(self) -> Result<AuditOutcome, Box<dyn std::error::Error>> {
        let fetcher = HttpFetcher::new(&self.config.user_agent)?;
        Ok(self.run_with(&fetcher).await)
    }

    /// Run the audit with a caller-supplied fetcher
    pub async fn run_with<F: Fetcher + ?Sized>(self, fetcher: &F) -> AuditOutcome {
        let records = crawlers::web::crawl(fetcher, &self.config).await;
        let report = report::generate(&records);
        AuditOutcome { records, report }
    }
}

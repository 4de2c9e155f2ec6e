use async_trait::async_trait;
use std::time::Duration;

/// Body and headers of a successful (2xx) response
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchResponse {
    /// Whether the content type header mentions XML
    pub fn is_xml(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("xml"))
    }
}

/// Errors that can occur while fetching a URL
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Issues single GET requests; the only way the audit touches the network
///
/// Implementations must not retry: a failed fetch is reported once.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url`, giving up after `timeout`. Non-2xx statuses are errors.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchResponse, FetchError>;
}

use crate::crawlers::crawler::{FetchError, FetchResponse, Fetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory fetcher serving canned responses; unknown URLs get a 404
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<FetchResponse, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(self, url: &str, body: &str) -> Self {
        self.respond(url, "text/html; charset=utf-8", body)
    }

    pub fn xml(self, url: &str, body: &str) -> Self {
        self.respond(url, "application/xml", body)
    }

    pub fn respond(mut self, url: &str, content_type: &str, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Ok(FetchResponse {
                status_code: 200,
                content_type: Some(content_type.to_string()),
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn fail(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<FetchResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

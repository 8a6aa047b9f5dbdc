//! Mock fetcher for testing.
//!
//! Serves canned markup per URL and records every call.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ScrapeError, ScrapeResult};
use crate::traits::fetcher::Fetcher;

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(String),
    Status(u16),
}

/// Mock fetcher for testing.
///
/// # Example
///
/// ```rust
/// use catalog::MockFetcher;
///
/// let mock = MockFetcher::new().with_page("http://books.test/", "<html></html>");
/// assert_eq!(mock.call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `markup` for `url` (builder pattern).
    pub fn with_page(self, url: &str, markup: impl Into<String>) -> Self {
        self.set_page(url, markup);
        self
    }

    /// Answer `url` with an HTTP error status (builder pattern).
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.set_status(url, status);
        self
    }

    /// Replace the markup served for `url`.
    pub fn set_page(&self, url: &str, markup: impl Into<String>) {
        if let Ok(mut responses) = self.responses.write() {
            responses.insert(url.to_string(), CannedResponse::Body(markup.into()));
        }
    }

    pub fn set_status(&self, url: &str, status: u16) {
        if let Ok(mut responses) = self.responses.write() {
            responses.insert(url.to_string(), CannedResponse::Status(status));
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().map(|c| c.len()).unwrap_or(0)
    }

    /// URLs requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> ScrapeResult<String> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(url.to_string());
        }

        let canned = self
            .responses
            .read()
            .ok()
            .and_then(|r| r.get(url).cloned());

        match canned {
            Some(CannedResponse::Body(body)) => Ok(body),
            Some(CannedResponse::Status(status)) => Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            }),
            None => Err(ScrapeError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_canned_page_and_records_calls() {
        let mock = MockFetcher::new().with_page("http://books.test/", "<p>hi</p>");

        assert_eq!(mock.fetch("http://books.test/").await.unwrap(), "<p>hi</p>");
        assert_eq!(mock.calls(), vec!["http://books.test/".to_string()]);
    }

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let mock = MockFetcher::new();

        let err = mock.fetch("http://elsewhere.test/").await.unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let mock = MockFetcher::new();
        let clone = mock.clone();
        clone.set_status("http://books.test/", 503);

        let err = mock.fetch("http://books.test/").await.unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status: 503, .. }));
        assert_eq!(clone.call_count(), 1);
    }
}

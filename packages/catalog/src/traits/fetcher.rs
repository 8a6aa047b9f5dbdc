//! Fetcher trait for pluggable page retrieval.
//!
//! The pipeline only needs "give me the markup behind this URL". Keeping that
//! behind a trait lets the server run against a canned page in tests.

use async_trait::async_trait;

use crate::error::ScrapeResult;

/// Retrieves the raw markup of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the response body as text.
    ///
    /// Non-success statuses are errors; there is no retry.
    async fn fetch(&self, url: &str) -> ScrapeResult<String>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "fetcher"
    }
}

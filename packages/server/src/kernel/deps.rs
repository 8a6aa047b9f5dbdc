//! Server dependencies for handlers (using traits for testability)
//!
//! This module provides the central dependency container shared by all routes.
//! The upstream page is reached through the `Fetcher` trait so tests can swap
//! in a canned page.

use std::path::PathBuf;
use std::sync::Arc;

use catalog::{Fetcher, HttpFetcher, ScrapeResult};

use crate::config::Config;
use crate::domains::catalog::{CatalogStore, ChartPublisher};

/// Dependencies accessible to route handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub fetcher: Arc<dyn Fetcher>,
    /// Listing page scraped by `/scrape`
    pub source_url: String,
    pub catalog: Arc<CatalogStore>,
    pub charts: ChartPublisher,
    pub reference_dir: PathBuf,
}

impl ServerDeps {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        source_url: impl Into<String>,
        static_dir: impl Into<PathBuf>,
        reference_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            source_url: source_url.into(),
            catalog: Arc::new(CatalogStore::new()),
            charts: ChartPublisher::new(static_dir),
            reference_dir: reference_dir.into(),
        }
    }

    /// Production dependencies: real HTTP fetcher, paths from config.
    pub fn from_config(config: &Config) -> ScrapeResult<Self> {
        let fetcher = HttpFetcher::new(config.fetch_timeout)?;
        Ok(Self::new(
            Arc::new(fetcher),
            config.source_url.clone(),
            config.static_dir.clone(),
            config.reference_dir.clone(),
        ))
    }
}

//! Fetch pipeline: fetch → extract → normalize.

use tracing::{debug, info};

use crate::error::ScrapeResult;
use crate::extract::extract_books;
use crate::normalize::normalize;
use crate::traits::fetcher::Fetcher;
use crate::types::BookRecord;

/// Fetch `url`, extract its product cards and normalize their prices.
///
/// Records come back in document order. Any failure aborts the whole run.
pub async fn scrape_catalog(fetcher: &dyn Fetcher, url: &str) -> ScrapeResult<Vec<BookRecord>> {
    let markup = fetcher.fetch(url).await?;

    let raw = extract_books(&markup)?;
    debug!(url = %url, cards = raw.len(), fetcher = fetcher.name(), "product cards extracted");

    let records = normalize(raw)?;
    info!(url = %url, records = records.len(), "catalog scraped");

    Ok(records)
}

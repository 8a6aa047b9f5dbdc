//! Refresh the catalog from the configured source page.

use std::sync::Arc;

use catalog::{scrape_catalog, CatalogSnapshot, ScrapeResult};
use tracing::info;

use crate::kernel::ServerDeps;

/// Run the fetch pipeline and publish the result.
///
/// The fetch runs without touching the store; only a fully normalized batch
/// is published, so a failed scrape leaves the previous snapshot in place.
pub async fn refresh_catalog(deps: &ServerDeps) -> ScrapeResult<Arc<CatalogSnapshot>> {
    let records = scrape_catalog(deps.fetcher.as_ref(), &deps.source_url).await?;
    let snapshot = deps.catalog.publish(records).await;

    info!(
        source = %deps.source_url,
        generation = snapshot.generation(),
        records = snapshot.len(),
        "catalog refreshed"
    );
    Ok(snapshot)
}

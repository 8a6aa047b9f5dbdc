//! CatalogStore - the single owner of the current catalog snapshot.
//!
//! Readers get their own `Arc` to an immutable snapshot and never hold the
//! lock while rendering. Writers swap in a whole new snapshot; the swap is
//! the only critical section.

use std::sync::Arc;

use catalog::{BookRecord, CatalogSnapshot};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Store holding the empty generation-0 snapshot.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot::empty())),
        }
    }

    /// The snapshot visible right now.
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.read().await.clone()
    }

    /// Replace the current snapshot with `records`.
    ///
    /// The new snapshot's generation is one past the one it replaces, so the
    /// last publisher wins and generations never repeat.
    pub async fn publish(&self, records: Vec<BookRecord>) -> Arc<CatalogSnapshot> {
        let mut current = self.current.write().await;
        let generation = current.generation() + 1;
        let snapshot = Arc::new(CatalogSnapshot::new(records, generation, Utc::now()));
        *current = snapshot.clone();

        debug!(generation, records = snapshot.len(), "catalog snapshot published");
        snapshot
    }
}

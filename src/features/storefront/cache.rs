use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};

use crate::core::error::Result;
use crate::modules::storage::CatalogStore;
use crate::shared::generation::{LoadGeneration, LoadTicket};
use crate::shared::records::{Category, Product};

/// Categories and products as loaded together from storage
#[derive(Debug)]
pub struct CatalogSnapshot {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    ticket: LoadTicket,
    loaded_at: Instant,
}

impl CatalogSnapshot {
    pub fn category(&self, id: uuid::Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn product(&self, id: uuid::Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Read-through cache of the whole catalog for the public storefront.
///
/// Every load takes a ticket from a [`LoadGeneration`]. Writers call
/// [`CatalogCache::invalidate`] after changing the catalog; loads started
/// before that point are never committed, and an older load finishing late
/// never replaces a newer snapshot. Only one reload runs at a time; callers
/// arriving meanwhile wait for it and reuse its result when still fresh.
pub struct CatalogCache {
    store: Arc<dyn CatalogStore>,
    generation: LoadGeneration,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
    reload: Mutex<()>,
    ttl: Duration,
}

impl CatalogCache {
    pub fn new(store: Arc<dyn CatalogStore>, ttl: Duration) -> Self {
        Self {
            store,
            generation: LoadGeneration::new(),
            snapshot: RwLock::new(None),
            reload: Mutex::new(()),
            ttl,
        }
    }

    /// Current snapshot, loading from storage when missing, expired or invalidated
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        let _reload = self.reload.lock().await;
        // another caller may have reloaded while we waited
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        self.load().await
    }

    /// Mark every snapshot loaded or in flight so far as outdated
    pub fn invalidate(&self) {
        self.generation.invalidate();
        tracing::debug!("Catalog snapshot invalidated");
    }

    async fn fresh_snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        let cached = self.snapshot.read().await;
        cached.as_ref().filter(|s| self.is_fresh(s)).cloned()
    }

    fn is_fresh(&self, snapshot: &CatalogSnapshot) -> bool {
        snapshot.loaded_at.elapsed() < self.ttl && !self.generation.is_stale(snapshot.ticket)
    }

    async fn load(&self) -> Result<Arc<CatalogSnapshot>> {
        let ticket = self.generation.begin();

        let (categories, products) =
            futures::try_join!(self.store.list_categories(), self.store.list_products())
                .map_err(|e| {
                    tracing::error!("Failed to load catalog snapshot: {:?}", e);
                    e
                })?;

        let snapshot = Arc::new(CatalogSnapshot {
            categories,
            products,
            ticket,
            loaded_at: Instant::now(),
        });

        let mut slot = self.snapshot.write().await;
        let committed = slot.as_ref().map(|s| s.ticket);
        if self.generation.may_commit(ticket, committed) {
            *slot = Some(snapshot.clone());
            tracing::info!(
                "Catalog snapshot loaded: {} categories, {} products",
                snapshot.categories.len(),
                snapshot.products.len()
            );
        } else {
            tracing::debug!("Discarding superseded catalog load {:?}", ticket);
        }

        Ok(snapshot)
    }
}

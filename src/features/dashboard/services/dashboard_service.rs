use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::modules::storage::CatalogStore;
use crate::shared::constants::RECENT_PRODUCTS_LIMIT;

/// Service for back-office dashboard queries
pub struct DashboardService {
    store: Arc<dyn CatalogStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Catalog totals and the latest additions
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let (categories, products) =
            futures::try_join!(self.store.list_categories(), self.store.list_products())
                .map_err(|e| {
                    tracing::error!("Failed to load dashboard summary: {:?}", e);
                    e
                })?;

        Ok(DashboardSummaryDto {
            total_products: products.len() as i64,
            total_categories: categories.len() as i64,
            recent_products: products
                .into_iter()
                .take(RECENT_PRODUCTS_LIMIT)
                .map(|p| p.into())
                .collect(),
        })
    }
}

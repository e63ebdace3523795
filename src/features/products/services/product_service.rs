use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    AdminProductQueryParams, CreateProductDto, ProductResponseDto, UpdateProductDto,
};
use crate::features::storefront::CatalogCache;
use crate::modules::browsing::filter::filter_by_category;
use crate::modules::browsing::{select_page, PageInfo};
use crate::modules::storage::CatalogStore;

/// Service for back-office product management
pub struct ProductService {
    store: Arc<dyn CatalogStore>,
    cache: Arc<CatalogCache>,
}

impl ProductService {
    pub fn new(store: Arc<dyn CatalogStore>, cache: Arc<CatalogCache>) -> Self {
        Self { store, cache }
    }

    /// One page of products narrowed by category and title search
    pub async fn list(
        &self,
        params: &AdminProductQueryParams,
    ) -> Result<(Vec<ProductResponseDto>, usize, PageInfo)> {
        let products = match params.search_text() {
            Some(query) => {
                let found = self.store.search_products_by_title(query).await?;
                filter_by_category(&found, params.category_id)
            }
            None => self.store.list_products_by_category(params.category_id).await?,
        };

        let total = products.len();
        let (window, info) = select_page(&products, params.page_number(), params.limit());
        let items = window.iter().cloned().map(|p| p.into()).collect();

        Ok((items, total, info))
    }

    pub async fn get(&self, id: Uuid) -> Result<ProductResponseDto> {
        self.store
            .get_product(id)
            .await?
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        self.ensure_category_exists(dto.category_id).await?;

        let product = self.store.create_product(dto.into()).await.map_err(|e| {
            tracing::error!("Failed to create product: {:?}", e);
            e
        })?;
        self.cache.invalidate();

        tracing::info!("Product created: {}", product.id);
        Ok(product.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        if let Some(category_id) = dto.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        let product = self
            .store
            .update_product(id, dto.into())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;
        self.cache.invalidate();

        tracing::info!("Product updated: {}", product.id);
        Ok(product.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete_product(id).await? {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }
        self.cache.invalidate();

        tracing::info!("Product deleted: {}", id);
        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: Uuid) -> Result<()> {
        match self.store.get_category(category_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                category_id
            ))),
        }
    }
}

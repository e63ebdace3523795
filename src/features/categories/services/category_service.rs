use std::sync::Arc;

use futures::future::try_join_all;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    AdminCategoryDto, CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::storefront::CatalogCache;
use crate::modules::browsing::{select_page, PageInfo};
use crate::modules::storage::CatalogStore;
use crate::shared::records::NewCategory;
use crate::shared::slug::slugify;
use crate::shared::types::PaginationQuery;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn CatalogStore>,
    cache: Arc<CatalogCache>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CatalogStore>, cache: Arc<CatalogCache>) -> Self {
        Self { store, cache }
    }

    /// List all categories, newest first
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            e
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        self.store
            .get_category_by_slug(slug)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// One page of categories with their product counts
    pub async fn list_with_counts(
        &self,
        params: &PaginationQuery,
    ) -> Result<(Vec<AdminCategoryDto>, usize, PageInfo)> {
        let categories = self.store.list_categories().await?;
        let total = categories.len();
        let (window, info) = select_page(&categories, params.page_number(), params.limit());

        let counts = try_join_all(
            window
                .iter()
                .map(|c| self.store.count_products_in_category(c.id)),
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to count products per category: {:?}", e);
            e
        })?;

        let items = window
            .iter()
            .cloned()
            .zip(counts)
            .map(|(category, count)| AdminCategoryDto::new(category, count))
            .collect();

        Ok((items, total, info))
    }

    /// Slug that would be derived from `name`
    pub fn slug_preview(&self, name: &str) -> String {
        slugify(name)
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let slug = match dto.slug {
            Some(slug) => slug,
            None => slugify(&dto.name.fr),
        };
        if slug.is_empty() {
            return Err(AppError::Validation(
                "slug: cannot be derived from the French name, provide one explicitly".to_string(),
            ));
        }

        let category = self
            .store
            .create_category(NewCategory {
                name: dto.name,
                slug,
            })
            .await?;
        self.cache.invalidate();

        tracing::info!("Category created: {} ({})", category.slug, category.id);
        Ok(category.into())
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self
            .store
            .update_category(id, dto.into())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
        self.cache.invalidate();

        tracing::info!("Category updated: {} ({})", category.slug, category.id);
        Ok(category.into())
    }

    /// Delete a category; refused while products still reference it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let product_count = self.store.count_products_in_category(id).await?;
        if product_count > 0 {
            return Err(AppError::Conflict(format!(
                "Category still contains {} product(s)",
                product_count
            )));
        }

        if !self.store.delete_category(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        self.cache.invalidate();

        tracing::info!("Category deleted: {}", id);
        Ok(())
    }
}

use std::num::NonZeroUsize;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::config::StoreConfig;
use crate::core::error::{AppError, Result};
use crate::features::products::dtos::ProductResponseDto;
use crate::features::storefront::cache::CatalogCache;
use crate::features::storefront::dtos::ProductDetailDto;
use crate::modules::browsing::{filter, select_page, PageInfo, ProductFilter};
use crate::modules::messaging::{contact_url, format_price, inquiry_message};
use crate::shared::locale::Language;

/// Public catalog: browsing and product pages, served from the cached snapshot
pub struct StorefrontService {
    cache: Arc<CatalogCache>,
    store_config: StoreConfig,
}

impl StorefrontService {
    pub fn new(cache: Arc<CatalogCache>, store_config: StoreConfig) -> Self {
        Self {
            cache,
            store_config,
        }
    }

    /// Filter the catalog and return the requested page
    pub async fn browse(
        &self,
        product_filter: &ProductFilter,
        page: usize,
        page_size: NonZeroUsize,
    ) -> Result<(Vec<ProductResponseDto>, usize, PageInfo)> {
        let snapshot = self.cache.snapshot().await?;
        let matching = filter::apply(&snapshot.products, product_filter);

        let total = matching.len();
        let (window, info) = select_page(&matching, page, page_size);
        let items = window.iter().cloned().map(|p| p.into()).collect();

        Ok((items, total, info))
    }

    pub async fn product_detail(&self, id: Uuid, language: Language) -> Result<ProductDetailDto> {
        let snapshot = self.cache.snapshot().await?;
        let product = snapshot
            .product(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;
        let category = snapshot.category(product.category_id).cloned();

        let title = product.title.get(language).to_string();
        let formatted_price = format_price(product.price, &self.store_config.currency);
        let message = inquiry_message(language, &title, product.id, &formatted_price);

        Ok(ProductDetailDto {
            description: product.description.get(language).to_string(),
            category_name: category.as_ref().map(|c| c.name.get(language).to_string()),
            contact_url: contact_url(&self.store_config.whatsapp_phone, &message),
            language,
            direction: language.direction(),
            title,
            formatted_price,
            category: category.map(|c| c.into()),
            product: product.into(),
        })
    }
}

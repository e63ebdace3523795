use std::num::NonZeroUsize;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::products::dtos::ProductResponseDto;
use crate::modules::browsing::{PriceRange, ProductFilter};
use crate::shared::constants::STOREFRONT_PAGE_SIZE;
use crate::shared::locale::{Direction, Language};
use crate::shared::types::{clamp_page_size, default_page, requested_page};

/// Filter state of the public catalog page
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BrowseProductsQuery {
    /// Only products filed under this category
    pub category_id: Option<Uuid>,
    /// Case-insensitive search in the title, any language
    pub search: Option<String>,
    /// Lower price bound (inclusive, default 0)
    #[param(value_type = Option<String>)]
    pub min_price: Option<Decimal>,
    /// Upper price bound (inclusive, default unbounded)
    #[param(value_type = Option<String>)]
    pub max_price: Option<Decimal>,
    /// Page number (1-indexed); out-of-range pages serve page 1
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    /// Items per page (default: 8, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page_size() -> i64 {
    STOREFRONT_PAGE_SIZE
}

impl BrowseProductsQuery {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category_id: self.category_id,
            query: self.search.clone().unwrap_or_default(),
            price: PriceRange::from_bounds(self.min_price, self.max_price),
        }
    }

    pub fn page_number(&self) -> usize {
        requested_page(self.page)
    }

    pub fn limit(&self) -> NonZeroUsize {
        clamp_page_size(self.page_size)
    }
}

/// Product page as shown to a visitor in one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    pub product: ProductResponseDto,
    pub category: Option<CategoryResponseDto>,
    pub language: Language,
    pub direction: Direction,
    /// Title in the resolved language
    pub title: String,
    /// Description in the resolved language
    pub description: String,
    /// Category name in the resolved language
    pub category_name: Option<String>,
    /// e.g. `"120.00 MAD"`
    pub formatted_price: String,
    /// Messaging deep-link pre-filled with an inquiry about this product
    pub contact_url: String,
}

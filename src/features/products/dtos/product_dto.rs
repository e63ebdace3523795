use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::locale::LocalizedText;
use crate::shared::records::{NewProduct, Product, ProductChanges};
use crate::shared::types::{clamp_page_size, default_page, requested_page};
use crate::shared::validation::{validate_localized_required, validate_price};

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub title: LocalizedText,
    pub price: Decimal,
    /// Cover image URL, empty when the product has none
    pub image: String,
    pub category_id: Uuid,
    pub description: LocalizedText,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            title: p.title,
            price: p.price,
            image: p.image,
            category_id: p.category_id,
            description: p.description,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(custom(function = "validate_localized_required"))]
    pub title: LocalizedText,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,

    pub category_id: Uuid,

    /// Descriptions may be left empty in any language
    #[serde(default)]
    pub description: LocalizedText,
}

impl From<CreateProductDto> for NewProduct {
    fn from(dto: CreateProductDto) -> Self {
        Self {
            title: dto.title,
            price: dto.price,
            image: dto.image.unwrap_or_default(),
            category_id: dto.category_id,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(custom(function = "validate_localized_required"))]
    pub title: Option<LocalizedText>,

    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,

    pub category_id: Option<Uuid>,

    pub description: Option<LocalizedText>,
}

impl From<UpdateProductDto> for ProductChanges {
    fn from(dto: UpdateProductDto) -> Self {
        Self {
            title: dto.title,
            price: dto.price,
            image: dto.image,
            category_id: dto.category_id,
            description: dto.description,
        }
    }
}

/// Query params for the back-office product list
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdminProductQueryParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
    /// Only products filed under this category
    pub category_id: Option<Uuid>,
    /// Search in the title, any language
    pub search: Option<String>,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl AdminProductQueryParams {
    pub fn page_number(&self) -> usize {
        requested_page(self.page)
    }

    pub fn limit(&self) -> std::num::NonZeroUsize {
        clamp_page_size(self.page_size)
    }

    /// Trimmed search text, `None` when blank
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_json(price: serde_json::Value, image: Option<&str>) -> serde_json::Value {
        json!({
            "title": { "fr": "L'Étranger", "en": "The Stranger", "ar": "الغريب" },
            "price": price,
            "image": image,
            "category_id": Uuid::nil(),
        })
    }

    #[test]
    fn test_price_accepts_string_and_number() {
        let from_string: CreateProductDto =
            serde_json::from_value(create_json(json!("79.90"), None)).unwrap();
        let from_number: CreateProductDto =
            serde_json::from_value(create_json(json!(79.9), None)).unwrap();
        assert_eq!(from_string.price, from_number.price);
        assert!(from_string.validate().is_ok());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let dto: CreateProductDto =
            serde_json::from_value(create_json(json!("-1.00"), None)).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_price_with_three_decimals_is_rejected() {
        let dto: CreateProductDto =
            serde_json::from_value(create_json(json!("19.999"), None)).unwrap();
        assert!(dto.validate().is_err());

        let dto = UpdateProductDto {
            price: Some(Decimal::new(19999, 3)),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_price_beyond_column_range_is_rejected() {
        let dto: CreateProductDto =
            serde_json::from_value(create_json(json!("10000000000"), None)).unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateProductDto =
            serde_json::from_value(create_json(json!("9999999999.99"), None)).unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_image_must_be_a_url() {
        let dto: CreateProductDto =
            serde_json::from_value(create_json(json!(10), Some("not a url"))).unwrap();
        assert!(dto.validate().is_err());

        let dto: CreateProductDto = serde_json::from_value(create_json(
            json!(10),
            Some("https://cdn.librairie.ma/covers/etranger.jpg"),
        ))
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_missing_image_becomes_empty() {
        let dto: CreateProductDto =
            serde_json::from_value(create_json(json!(10), None)).unwrap();
        let product: NewProduct = dto.into();
        assert_eq!(product.image, "");
        assert_eq!(product.description, LocalizedText::default());
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        assert!(UpdateProductDto::default().validate().is_ok());

        let dto = UpdateProductDto {
            title: Some(LocalizedText::new("", "Title", "عنوان")),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let params: AdminProductQueryParams =
            serde_json::from_value(json!({ "search": "   " })).unwrap();
        assert_eq!(params.search_text(), None);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit().get(), 10);
    }
}

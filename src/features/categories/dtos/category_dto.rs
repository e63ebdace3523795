use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::shared::locale::LocalizedText;
use crate::shared::records::{Category, CategoryChanges};
use crate::shared::validation::{validate_localized_required, SLUG_REGEX};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: LocalizedText,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            created_at: c.created_at,
        }
    }
}

/// Back-office view of a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminCategoryDto {
    pub id: Uuid,
    pub name: LocalizedText,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    /// Number of products filed under this category
    pub product_count: i64,
}

impl AdminCategoryDto {
    pub fn new(category: Category, product_count: i64) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            created_at: category.created_at,
            product_count,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(custom(function = "validate_localized_required"))]
    pub name: LocalizedText,

    /// Derived from the French name when omitted
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "slug must be lowercase letters and digits separated by single hyphens"
    ))]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(custom(function = "validate_localized_required"))]
    pub name: Option<LocalizedText>,

    #[validate(regex(
        path = *SLUG_REGEX,
        message = "slug must be lowercase letters and digits separated by single hyphens"
    ))]
    pub slug: Option<String>,
}

impl From<UpdateCategoryDto> for CategoryChanges {
    fn from(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
        }
    }
}

/// Query params for previewing a derived slug
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SlugPreviewQuery {
    /// Category name to derive the slug from
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewDto {
    pub slug: String,
}

//! Canonical in-process catalog records.
//!
//! Storage rows are flat (one column per language); everything past the
//! storage boundary works with these nested shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::shared::locale::LocalizedText;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: LocalizedText,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub title: LocalizedText,
    pub price: Decimal,
    pub image: String,
    pub category_id: Uuid,
    pub description: LocalizedText,
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: LocalizedText,
    pub slug: String,
}

/// Partial category update; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<LocalizedText>,
    pub slug: Option<String>,
}

/// Fields required to insert a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: LocalizedText,
    pub price: Decimal,
    pub image: String,
    pub category_id: Uuid,
    pub description: LocalizedText,
}

/// Partial product update; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub title: Option<LocalizedText>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<LocalizedText>,
}

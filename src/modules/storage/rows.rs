use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::locale::LocalizedText;
use crate::shared::records::{Category, Product};
use crate::shared::validation::SLUG_REGEX;

/// Database row for a category (one column per language)
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: Uuid,
    pub name_fr: String,
    pub name_en: String,
    pub name_ar: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Database row for a product (one column per language)
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub title_fr: String,
    pub title_en: String,
    pub title_ar: String,
    pub price: Decimal,
    pub image: String,
    pub category_id: Uuid,
    pub description_fr: String,
    pub description_en: String,
    pub description_ar: String,
    pub created_at: DateTime<Utc>,
}

/// A stored row that does not describe a valid record
#[derive(Debug, thiserror::Error)]
pub enum RowMappingError {
    #[error("category {id} has malformed slug '{slug}'")]
    InvalidSlug { id: Uuid, slug: String },

    #[error("product {id} has negative price {price}")]
    NegativePrice { id: Uuid, price: Decimal },
}

impl TryFrom<CategoryRow> for Category {
    type Error = RowMappingError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        if !SLUG_REGEX.is_match(&row.slug) {
            return Err(RowMappingError::InvalidSlug {
                id: row.id,
                slug: row.slug,
            });
        }

        Ok(Category {
            id: row.id,
            name: LocalizedText {
                fr: row.name_fr,
                en: row.name_en,
                ar: row.name_ar,
            },
            slug: row.slug,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = RowMappingError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        if row.price < Decimal::ZERO {
            return Err(RowMappingError::NegativePrice {
                id: row.id,
                price: row.price,
            });
        }

        Ok(Product {
            id: row.id,
            title: LocalizedText {
                fr: row.title_fr,
                en: row.title_en,
                ar: row.title_ar,
            },
            price: row.price,
            image: row.image,
            category_id: row.category_id,
            description: LocalizedText {
                fr: row.description_fr,
                en: row.description_en,
                ar: row.description_ar,
            },
            created_at: row.created_at,
        })
    }
}

/// Map a batch of rows, failing on the first malformed one
pub fn map_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, RowMappingError>
where
    T: TryFrom<R, Error = RowMappingError>,
{
    rows.into_iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_row(slug: &str) -> CategoryRow {
        CategoryRow {
            id: Uuid::new_v4(),
            name_fr: "Poésie".to_string(),
            name_en: "Poetry".to_string(),
            name_ar: "شعر".to_string(),
            slug: slug.to_string(),
            created_at: Utc::now(),
        }
    }

    fn product_row(price: Decimal) -> ProductRow {
        ProductRow {
            id: Uuid::new_v4(),
            title_fr: "Les Fleurs du mal".to_string(),
            title_en: "The Flowers of Evil".to_string(),
            title_ar: "أزهار الشر".to_string(),
            price,
            image: "https://cdn.example.com/fleurs.jpg".to_string(),
            category_id: Uuid::new_v4(),
            description_fr: "Recueil".to_string(),
            description_en: "Collection".to_string(),
            description_ar: "".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_category_row_maps_to_nested_name() {
        let category = Category::try_from(category_row("poesie")).unwrap();
        assert_eq!(category.name, LocalizedText::new("Poésie", "Poetry", "شعر"));
        assert_eq!(category.slug, "poesie");
    }

    #[test]
    fn test_category_row_with_bad_slug_is_rejected() {
        let err = Category::try_from(category_row("Poésie")).unwrap_err();
        assert!(matches!(err, RowMappingError::InvalidSlug { .. }));
    }

    #[test]
    fn test_product_row_maps_all_languages() {
        let row = product_row(Decimal::new(4500, 2));
        let category_id = row.category_id;
        let product = Product::try_from(row).unwrap();
        assert_eq!(product.title.en, "The Flowers of Evil");
        assert_eq!(product.description.ar, "");
        assert_eq!(product.price, Decimal::new(45, 0));
        assert_eq!(product.category_id, category_id);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let rows = vec![product_row(Decimal::ONE), product_row(Decimal::new(-1, 0))];
        let err = map_rows::<_, Product>(rows).unwrap_err();
        assert!(matches!(err, RowMappingError::NegativePrice { .. }));
    }
}

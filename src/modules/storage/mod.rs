//! Storage module for the catalog
//!
//! Defines the read/write contract the features use to reach the
//! relational backend, the flat row shapes it stores, and the PostgreSQL
//! implementation of the contract.

mod postgres;
mod rows;

pub use postgres::PgCatalogStore;
pub use rows::RowMappingError;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::shared::records::{
    Category, CategoryChanges, NewCategory, NewProduct, Product, ProductChanges,
};

/// Catalog persistence contract.
///
/// Listings are ordered by creation time, newest first. Lookups and writes
/// addressing a missing id return `None` (or `false` for deletes) rather
/// than an error.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>>;
    async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;
    async fn create_category(&self, category: NewCategory) -> Result<Category>;
    async fn update_category(&self, id: Uuid, changes: CategoryChanges)
        -> Result<Option<Category>>;
    async fn delete_category(&self, id: Uuid) -> Result<bool>;

    async fn list_products(&self) -> Result<Vec<Product>>;
    async fn list_products_by_category(&self, category_id: Option<Uuid>) -> Result<Vec<Product>>;
    /// Case-insensitive substring search over the title in every language
    async fn search_products_by_title(&self, query: &str) -> Result<Vec<Product>>;
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>>;
    async fn count_products_in_category(&self, category_id: Uuid) -> Result<i64>;
    async fn create_product(&self, product: NewProduct) -> Result<Product>;
    async fn update_product(&self, id: Uuid, changes: ProductChanges) -> Result<Option<Product>>;
    async fn delete_product(&self, id: Uuid) -> Result<bool>;
}

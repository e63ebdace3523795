use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::rows::{map_rows, CategoryRow, ProductRow};
use super::CatalogStore;
use crate::core::error::{AppError, Result};
use crate::shared::records::{
    Category, CategoryChanges, NewCategory, NewProduct, Product, ProductChanges,
};

const CATEGORY_COLUMNS: &str = "id, name_fr, name_en, name_ar, slug, created_at";

const PRODUCT_COLUMNS: &str = "id, title_fr, title_en, title_ar, price, image, category_id, \
     description_fr, description_en, description_ar, created_at";

/// Unique violations and foreign key violations carry meaning for callers;
/// everything else stays a generic database error.
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // PostgreSQL unique_violation
        if db_err.code().as_deref() == Some("23505") {
            if db_err
                .constraint()
                .is_some_and(|c| c.contains("slug"))
            {
                return AppError::Conflict("A category with this slug already exists".to_string());
            }
            return AppError::Conflict("Record already exists".to_string());
        }

        // PostgreSQL foreign_key_violation
        if db_err.code().as_deref() == Some("23503") {
            return AppError::BadRequest("Referenced category does not exist".to_string());
        }
    }

    AppError::Database(e)
}

/// Escape `LIKE` metacharacters so user input only matches literally
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// [`CatalogStore`] backed by PostgreSQL
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories ORDER BY created_at DESC",
            CATEGORY_COLUMNS
        );
        let rows: Vec<CategoryRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(map_rows(rows)?)
    }

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);
        let row: Option<CategoryRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(row.map(Category::try_from).transpose()?)
    }

    async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let query = format!(
            "SELECT {} FROM categories WHERE slug = $1",
            CATEGORY_COLUMNS
        );
        let row: Option<CategoryRow> = sqlx::query_as(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by slug: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(row.map(Category::try_from).transpose()?)
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (name_fr, name_en, name_ar, slug)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        let row: CategoryRow = sqlx::query_as(&query)
            .bind(&category.name.fr)
            .bind(&category.name.en)
            .bind(&category.name.ar)
            .bind(&category.slug)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(Category::try_from(row)?)
    }

    async fn update_category(
        &self,
        id: Uuid,
        changes: CategoryChanges,
    ) -> Result<Option<Category>> {
        let (name_fr, name_en, name_ar) = match changes.name {
            Some(name) => (Some(name.fr), Some(name.en), Some(name.ar)),
            None => (None, None, None),
        };

        let query = format!(
            r#"
            UPDATE categories
            SET name_fr = COALESCE($1, name_fr),
                name_en = COALESCE($2, name_en),
                name_ar = COALESCE($3, name_ar),
                slug = COALESCE($4, slug)
            WHERE id = $5
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        let row: Option<CategoryRow> = sqlx::query_as(&query)
            .bind(name_fr)
            .bind(name_en)
            .bind(name_ar)
            .bind(changes.slug)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(row.map(Category::try_from).transpose()?)
    }

    async fn delete_category(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match handle_db_error(e) {
                // Products still point at this category
                AppError::BadRequest(_) => {
                    AppError::Conflict("Category still contains products".to_string())
                }
                other => other,
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        self.list_products_by_category(None).await
    }

    async fn list_products_by_category(&self, category_id: Option<Uuid>) -> Result<Vec<Product>> {
        let query = format!(
            r#"
            SELECT {}
            FROM products
            WHERE ($1::uuid IS NULL OR category_id = $1)
            ORDER BY created_at DESC
            "#,
            PRODUCT_COLUMNS
        );
        let rows: Vec<ProductRow> = sqlx::query_as(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list products: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(map_rows(rows)?)
    }

    async fn search_products_by_title(&self, query: &str) -> Result<Vec<Product>> {
        if query.trim().is_empty() {
            return self.list_products().await;
        }

        let sql = format!(
            r#"
            SELECT {}
            FROM products
            WHERE title_fr ILIKE $1 OR title_en ILIKE $1 OR title_ar ILIKE $1
            ORDER BY created_at DESC
            "#,
            PRODUCT_COLUMNS
        );
        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(like_pattern(query.trim()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search products: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(map_rows(rows)?)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let query = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let row: Option<ProductRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(row.map(Product::try_from).transpose()?)
    }

    async fn count_products_in_category(&self, category_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product> {
        let query = format!(
            r#"
            INSERT INTO products (
                title_fr, title_en, title_ar, price, image, category_id,
                description_fr, description_en, description_ar
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );
        let row: ProductRow = sqlx::query_as(&query)
            .bind(&product.title.fr)
            .bind(&product.title.en)
            .bind(&product.title.ar)
            .bind(product.price)
            .bind(&product.image)
            .bind(product.category_id)
            .bind(&product.description.fr)
            .bind(&product.description.en)
            .bind(&product.description.ar)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(Product::try_from(row)?)
    }

    async fn update_product(&self, id: Uuid, changes: ProductChanges) -> Result<Option<Product>> {
        let (title_fr, title_en, title_ar) = match changes.title {
            Some(t) => (Some(t.fr), Some(t.en), Some(t.ar)),
            None => (None, None, None),
        };
        let (description_fr, description_en, description_ar) = match changes.description {
            Some(d) => (Some(d.fr), Some(d.en), Some(d.ar)),
            None => (None, None, None),
        };

        let query = format!(
            r#"
            UPDATE products
            SET title_fr = COALESCE($1, title_fr),
                title_en = COALESCE($2, title_en),
                title_ar = COALESCE($3, title_ar),
                price = COALESCE($4, price),
                image = COALESCE($5, image),
                category_id = COALESCE($6, category_id),
                description_fr = COALESCE($7, description_fr),
                description_en = COALESCE($8, description_en),
                description_ar = COALESCE($9, description_ar)
            WHERE id = $10
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );
        let row: Option<ProductRow> = sqlx::query_as(&query)
            .bind(title_fr)
            .bind(title_en)
            .bind(title_ar)
            .bind(changes.price)
            .bind(changes.image)
            .bind(changes.category_id)
            .bind(description_fr)
            .bind(description_en)
            .bind(description_ar)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(row.map(Product::try_from).transpose()?)
    }

    async fn delete_product(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("dune"), "%dune%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::products::dtos::{
    AdminProductQueryParams, CreateProductDto, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta};

/// List products with category and title filters (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(AdminProductQueryParams),
    responses(
        (status = 200, description = "Products retrieved successfully", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_products(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Query(params): Query<AdminProductQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let (items, total, info) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta::paged(total, info)),
    )))
}

/// Get a product by ID (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product retrieved successfully", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Create a product (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(product), None, None)),
    ))
}

/// Update a product (admin only)
#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 404, description = "Product not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Delete a product (admin only)
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 404, description = "Product not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::products::{routes, ProductService};
    use crate::features::storefront::CatalogCache;
    use crate::modules::storage::CatalogStore;
    use crate::shared::test_helpers::{
        new_category, new_product, with_admin_auth, with_user_auth, InMemoryCatalogStore,
    };

    fn router(store: Arc<InMemoryCatalogStore>) -> axum::Router {
        let cache = Arc::new(CatalogCache::new(store.clone(), Duration::from_secs(60)));
        routes::admin_routes(Arc::new(ProductService::new(store, cache)))
    }

    #[tokio::test]
    async fn test_create_product() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let category = store
            .create_category(new_category("Romans", "romans"))
            .await
            .unwrap();
        let server = TestServer::new(with_admin_auth(router(store))).unwrap();

        let response = server
            .post("/api/admin/products")
            .json(&json!({
                "title": { "fr": "L'Alchimiste", "en": "The Alchemist", "ar": "الخيميائي" },
                "price": "95.00",
                "image": "https://cdn.librairie.ma/covers/alchimiste.jpg",
                "category_id": category.id,
                "description": { "fr": "Un conte", "en": "A tale", "ar": "" }
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["title"]["en"], "The Alchemist");
        assert_eq!(body["data"]["price"], "95.00");
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_is_bad_request() {
        let server =
            TestServer::new(with_admin_auth(router(Arc::new(InMemoryCatalogStore::new()))))
                .unwrap();
        server
            .post("/api/admin/products")
            .json(&json!({
                "title": { "fr": "a", "en": "b", "ar": "c" },
                "price": 10,
                "category_id": uuid::Uuid::new_v4()
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let server =
            TestServer::new(with_admin_auth(router(Arc::new(InMemoryCatalogStore::new()))))
                .unwrap();
        let response = server
            .post("/api/admin/products")
            .json(&json!({ "title": "not localized" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_list_filters_by_search() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let category = store
            .create_category(new_category("Romans", "romans"))
            .await
            .unwrap();
        for title in ["Nedjma", "La Grande Maison", "Le Fils du pauvre"] {
            store
                .create_product(new_product(title, 40, category.id))
                .await
                .unwrap();
        }
        let server = TestServer::new(with_admin_auth(router(store))).unwrap();

        let body: Value = server
            .get("/api/admin/products")
            .add_query_param("search", "maison")
            .await
            .json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["title"]["fr"], "La Grande Maison");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = Arc::new(InMemoryCatalogStore::new());
        let category = store
            .create_category(new_category("Romans", "romans"))
            .await
            .unwrap();
        let product = store
            .create_product(new_product("Nedjma", 40, category.id))
            .await
            .unwrap();
        let server = TestServer::new(with_admin_auth(router(store))).unwrap();
        let path = format!("/api/admin/products/{}", product.id);

        server.delete(&path).await.assert_status_ok();
        server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_plain_user_cannot_write() {
        let server =
            TestServer::new(with_user_auth(router(Arc::new(InMemoryCatalogStore::new()))))
                .unwrap();
        server
            .post("/api/admin/products")
            .json(&json!({}))
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}

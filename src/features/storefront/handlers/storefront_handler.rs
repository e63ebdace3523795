use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::RequestLanguage;
use crate::features::products::dtos::ProductResponseDto;
use crate::features::storefront::dtos::{BrowseProductsQuery, ProductDetailDto};
use crate::features::storefront::services::StorefrontService;
use crate::shared::types::{ApiResponse, Meta};

/// Browse the catalog with category, text and price filters
#[utoipa::path(
    get,
    path = "/api/products",
    params(BrowseProductsQuery),
    responses(
        (status = 200, description = "One page of matching products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "storefront"
)]
pub async fn browse_products(
    State(service): State<Arc<StorefrontService>>,
    Query(query): Query<BrowseProductsQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let (items, total, info) = service
        .browse(&query.filter(), query.page_number(), query.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta::paged(total, info)),
    )))
}

/// Product page in the visitor's language
///
/// The language comes from `lang`, then `Accept-Language`, defaulting to French.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        ("lang" = Option<String>, Query, description = "Display language: fr, en or ar")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductDetailDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "storefront"
)]
pub async fn get_product_detail(
    State(service): State<Arc<StorefrontService>>,
    RequestLanguage(language): RequestLanguage,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductDetailDto>>> {
    let detail = service.product_detail(id, language).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

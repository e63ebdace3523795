use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dto as auth_dto, handler as auth_handler};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::storefront::{dtos as storefront_dtos, handlers as storefront_handlers};
use crate::modules::browsing::{PageInfo, PageMarker};
use crate::shared::locale::{Direction, Language, LocalizedText};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handler::get_me,
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Storefront (public)
        storefront_handlers::browse_products,
        storefront_handlers::get_product_detail,
        // Categories (admin)
        categories_handlers::list_admin_categories,
        categories_handlers::preview_slug,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products (admin)
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Dashboard (admin)
        dashboard_handlers::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            PageInfo,
            PageMarker,
            Language,
            Direction,
            LocalizedText,
            // Auth
            auth_dto::MeResponseDto,
            ApiResponse<auth_dto::MeResponseDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::AdminCategoryDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::SlugPreviewDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<Vec<categories_dtos::AdminCategoryDto>>,
            ApiResponse<categories_dtos::SlugPreviewDto>,
            // Products
            products_dtos::ProductResponseDto,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            // Storefront
            storefront_dtos::ProductDetailDto,
            ApiResponse<storefront_dtos::ProductDetailDto>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "auth", description = "Session identity"),
        (name = "categories", description = "Book categories"),
        (name = "storefront", description = "Public catalog browsing (public)"),
        (name = "products", description = "Product management (admin only)"),
        (name = "Dashboard", description = "Back-office overview (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Librairie API",
        version = "0.1.0",
        description = "API documentation for the Librairie bookstore",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

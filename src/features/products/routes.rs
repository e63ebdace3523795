use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::{handlers, services::ProductService};

/// Create admin routes for product management (admin only)
pub fn admin_routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/admin/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/admin/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::storefront::{handlers, services::StorefrontService};

/// Create routes for the public catalog
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<StorefrontService>) -> Router {
    Router::new()
        .route("/api/products", get(handlers::browse_products))
        .route("/api/products/{id}", get(handlers::get_product_detail))
        .with_state(service)
}

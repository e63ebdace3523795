pub mod cache;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use cache::CatalogCache;
pub use services::StorefrontService;

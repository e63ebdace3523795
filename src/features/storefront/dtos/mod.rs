pub mod storefront_dto;

pub use storefront_dto::{BrowseProductsQuery, ProductDetailDto};

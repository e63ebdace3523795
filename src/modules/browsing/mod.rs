//! Catalog browsing engines
//!
//! Pure, synchronous transformations over already-loaded records: product
//! filtering and page windowing.

pub mod filter;
pub mod pagination;

pub use filter::{PriceRange, ProductFilter};
pub use pagination::{select_page, PageInfo, PageMarker};

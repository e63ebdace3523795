/// Default page size for admin listings
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Default page size for the public product grid
pub const STOREFRONT_PAGE_SIZE: i64 = 8;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of products shown in the dashboard "recent" list
pub const RECENT_PRODUCTS_LIMIT: usize = 5;

/// Currency used when none is configured
pub const DEFAULT_CURRENCY: &str = "MAD";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can manage products and categories
pub const ROLE_ADMIN: &str = "admin";

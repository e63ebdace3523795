use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::modules::browsing::pagination::PageInfo;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

impl Meta {
    pub fn total(total: usize) -> Self {
        Self {
            total: total as i64,
            pagination: None,
        }
    }

    pub fn paged(total: usize, pagination: PageInfo) -> Self {
        Self {
            total: total as i64,
            pagination: Some(pagination),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard pagination query parameters for admin list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

pub fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> NonZeroUsize {
        clamp_page_size(self.page_size)
    }

    pub fn page_number(&self) -> usize {
        requested_page(self.page)
    }
}

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`
pub fn clamp_page_size(page_size: i64) -> NonZeroUsize {
    NonZeroUsize::new(page_size.clamp(1, MAX_PAGE_SIZE) as usize).unwrap_or(NonZeroUsize::MIN)
}

/// Requested page as an index; negative values map to 0, which no paginator accepts
pub fn requested_page(page: i64) -> usize {
    usize::try_from(page).unwrap_or(0)
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

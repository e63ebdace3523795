use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::products::dtos::ProductResponseDto;

/// Back-office landing page figures
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub total_products: i64,
    pub total_categories: i64,
    /// Most recently added products, newest first
    pub recent_products: Vec<ProductResponseDto>,
}

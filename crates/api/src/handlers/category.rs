//! Handlers for the `/categories` resource.

use axum::Json;
use catalog_core::category::CATEGORIES;

/// GET /api/categories
pub async fn list() -> Json<&'static [&'static str]> {
    Json(CATEGORIES)
}

//! Query parameter types for API handlers.

use serde::Deserialize;

/// Optional category filter for project listing (`?category=`).
///
/// An empty value is a real filter and matches nothing; omit the parameter
/// to list every project.
#[derive(Debug, Deserialize)]
pub struct CategoryFilterParams {
    pub category: Option<String>,
}

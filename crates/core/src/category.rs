//! The fixed, server-owned set of project categories.
//!
//! Labels are Hebrew and double as identifiers: a project's `categoryId`
//! is the label itself.

/// Food.
pub const CATEGORY_FOOD: &str = "מזון";

/// Lifestyle.
pub const CATEGORY_LIFESTYLE: &str = "אורח חיים";

/// Computing.
pub const CATEGORY_COMPUTING: &str = "מחשבים";

/// Sports.
pub const CATEGORY_SPORTS: &str = "ספורט";

/// Anything else.
pub const CATEGORY_OTHER: &str = "אחר";

/// All categories, in display order.
pub const CATEGORIES: &[&str] = &[
    CATEGORY_FOOD,
    CATEGORY_LIFESTYLE,
    CATEGORY_COMPUTING,
    CATEGORY_SPORTS,
    CATEGORY_OTHER,
];

/// Returns `true` if `label` is one of [`CATEGORIES`]. Matching is exact.
pub fn is_valid_category(label: &str) -> bool {
    CATEGORIES.contains(&label)
}

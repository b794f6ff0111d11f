//! Project input validation.
//!
//! Works on the raw JSON object a client sent so that "field absent" and
//! "field present but wrong type" can be told apart. Pure logic, shared by
//! the create and update paths.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::category::is_valid_category;

/// Field name -> error message, in field order.
pub type FieldErrors = IndexMap<String, String>;

pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_IMAGE_URL: &str = "imageUrl";
pub const FIELD_CATEGORY_ID: &str = "categoryId";
pub const FIELD_RATING: &str = "rating";

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_NON_EMPTY_STRING: &str = "Must be a non-empty string";
pub const MSG_INVALID_URL: &str = "Must be a valid URL";
pub const MSG_INVALID_CATEGORY: &str = "Must be a valid category";
pub const MSG_INVALID_RATING: &str = "Must be an integer between 1 and 5";

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// Prefix accepted for images embedded by client-side uploads.
pub const DATA_IMAGE_PREFIX: &str = "data:image/";

/// Whether missing fields count as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Creation: every required field must be present.
    Full,
    /// Partial update: only fields that are present are checked.
    Partial,
}

/// Result of validating one input object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: FieldErrors,
}

/// Validate a project input object.
///
/// `name`, `description`, `imageUrl` and `categoryId` are required in
/// [`ValidationMode::Full`]. `rating` is optional in both modes but must be
/// an integer in `MIN_RATING..=MAX_RATING` when present. Unknown fields are
/// ignored.
pub fn validate_project_input(input: &Map<String, Value>, mode: ValidationMode) -> ValidationOutcome {
    let mut errors = FieldErrors::new();

    let mut check = |field: &str, required: bool, predicate: fn(&Value) -> bool, message: &str| {
        match input.get(field) {
            None => {
                if required && mode == ValidationMode::Full {
                    errors.insert(field.to_string(), MSG_REQUIRED.to_string());
                }
            }
            Some(value) => {
                if !predicate(value) {
                    errors.insert(field.to_string(), message.to_string());
                }
            }
        }
    };

    check(FIELD_NAME, true, is_non_empty_string, MSG_NON_EMPTY_STRING);
    check(FIELD_DESCRIPTION, true, is_non_empty_string, MSG_NON_EMPTY_STRING);
    check(FIELD_IMAGE_URL, true, is_valid_image_value, MSG_INVALID_URL);
    check(FIELD_CATEGORY_ID, true, is_valid_category_value, MSG_INVALID_CATEGORY);
    check(FIELD_RATING, false, is_valid_rating, MSG_INVALID_RATING);

    ValidationOutcome {
        valid: errors.is_empty(),
        errors,
    }
}

/// A JSON string that is non-empty after trimming.
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// An `http(s)` URL with a host, or an embedded `data:image/...` URI.
pub fn is_valid_image_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    if url.starts_with(DATA_IMAGE_PREFIX) {
        return true;
    }
    match Url::parse(url.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// An integer rating in `MIN_RATING..=MAX_RATING`.
pub fn is_valid_rating(value: &Value) -> bool {
    value
        .as_u64()
        .is_some_and(|r| (u64::from(MIN_RATING)..=u64::from(MAX_RATING)).contains(&r))
}

fn is_valid_image_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_image_url)
}

fn is_valid_category_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_category)
}

//! Fragment routing between the grid and a project's details.

use catalog_core::types::ProjectId;

/// Fragment path prefix for the details screen: `#/projects/{id}`.
pub const DETAILS_PREFIX: &str = "/projects/";

/// The screen selected by the URL fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Grid,
    Details(ProjectId),
}

impl Route {
    /// Resolve a fragment (with or without the leading `#`).
    ///
    /// Only `/projects/<positive integer>` selects details; anything else,
    /// including the empty fragment, is the grid.
    pub fn parse(fragment: &str) -> Self {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let Some(raw_id) = path.strip_prefix(DETAILS_PREFIX) else {
            return Route::Grid;
        };
        if raw_id.is_empty() || !raw_id.bytes().all(|b| b.is_ascii_digit()) {
            return Route::Grid;
        }
        match raw_id.parse::<ProjectId>() {
            Ok(id) if id > 0 => Route::Details(id),
            _ => Route::Grid,
        }
    }

    /// The fragment that selects this route.
    pub fn fragment(&self) -> String {
        match self {
            Route::Grid => String::new(),
            Route::Details(id) => format!("#{DETAILS_PREFIX}{id}"),
        }
    }
}

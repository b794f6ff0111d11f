/// Project identifiers are positive integers handed out by the store.
pub type ProjectId = i64;

/// Parse a raw identifier (path segment, fragment, form value) into a
/// [`ProjectId`].
///
/// Surrounding whitespace is ignored. Anything that is not a base-10
/// integer yields `None`, which callers treat the same as an unknown id.
pub fn parse_project_id(raw: &str) -> Option<ProjectId> {
    raw.trim().parse::<ProjectId>().ok()
}

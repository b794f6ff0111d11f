//! Client-side search and sort for the project grid.
//!
//! The API only filters by category; text search and ordering are applied
//! here to the last-fetched records.

use std::cmp::Ordering;
use std::str::FromStr;

use catalog_core::project::Project;
use catalog_core::validation::MIN_RATING;
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

/// Grid ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Alphabetical by name.
    NameAsc,
    /// Highest id first.
    Newest,
    /// Highest rating first. Unset ratings count as [`MIN_RATING`].
    #[default]
    RatingDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name-asc",
            SortOrder::Newest => "newest",
            SortOrder::RatingDesc => "rating-desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortOrder::NameAsc),
            "newest" => Ok(SortOrder::Newest),
            "rating-desc" => Ok(SortOrder::RatingDesc),
            other => Err(format!("Unknown sort order '{other}'")),
        }
    }
}

/// Everything the grid controls select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridQuery {
    /// Free-text search; blank means no search.
    pub search: String,
    pub sort: SortOrder,
    /// Category filter, applied server-side.
    pub category: Option<String>,
}

/// Rating used for display and ordering.
pub fn display_rating(project: &Project) -> u8 {
    project.rating.unwrap_or(MIN_RATING)
}

/// Case-insensitive substring match across name, description and id.
pub fn matches_search(project: &Project, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    project.name.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
        || project.id.to_string().contains(&needle)
}

/// Collator for project names: Hebrew rules, falling back to the root
/// collation. `None` only if no collation data is available at all.
pub fn name_collator() -> Option<Collator> {
    match Collator::try_new(&locale!("he").into(), CollatorOptions::new()) {
        Ok(collator) => return Some(collator),
        Err(err) => tracing::warn!(error = %err, "Hebrew collation unavailable, using root"),
    }
    match Collator::try_new(&locale!("und").into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(error = %err, "Root collation unavailable, sorting by code point");
            None
        }
    }
}

/// Compare names for alphabetical display.
///
/// Locale-aware through `collator`; the raw strings break ties so the
/// order is total.
pub fn compare_names(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());
    let collated = match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    collated.then_with(|| a.cmp(b))
}

/// Sort in place. The sort is stable: ties keep fetch order.
pub fn sort_projects(projects: &mut [&Project], order: SortOrder) {
    match order {
        SortOrder::NameAsc => {
            let collator = name_collator();
            projects.sort_by(|a, b| compare_names(collator.as_ref(), &a.name, &b.name))
        }
        SortOrder::Newest => projects.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::RatingDesc => {
            projects.sort_by(|a, b| display_rating(b).cmp(&display_rating(a)))
        }
    }
}

/// The projects the grid should show, searched and sorted.
pub fn visible_projects<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    query: &GridQuery,
) -> Vec<&'a Project> {
    let mut visible: Vec<&Project> = projects
        .into_iter()
        .filter(|p| matches_search(p, &query.search))
        .collect();
    sort_projects(&mut visible, query.sort);
    visible
}

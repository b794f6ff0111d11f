//! HTML rendering for the grid and details screens.
//!
//! Every interpolated value goes through [`escape_html`].

use std::fmt::Write;

use catalog_core::project::Project;
use catalog_core::validation::{MAX_RATING, MIN_RATING};

use crate::grid::display_rating;
use crate::messages;
use crate::route::Route;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Filled and empty stars, e.g. `★★★☆☆` for 3.
pub fn render_stars(rating: u8) -> String {
    let filled = rating.clamp(MIN_RATING, MAX_RATING);
    let mut stars = "★".repeat(filled.into());
    stars.push_str(&"☆".repeat((MAX_RATING - filled).into()));
    stars
}

/// A single grid card. Clicking it opens the details fragment.
pub fn render_card(project: &Project) -> String {
    let id = project.id;
    let name = escape_html(&project.name);
    let rating = display_rating(project);
    format!(
        r#"<div class="card" dir="rtl" data-id="{id}" data-href="{href}">
<div class="card-image"><img src="{src}" alt="{name}"></div>
<div class="card-body">
<h3 class="card-title">{name}</h3>
<p class="muted">{category_label}: {category}</p>
<div class="rating" data-rating="{rating}">{stars}</div>
<div class="card-actions">
<button data-action="edit" data-id="{id}">{edit}</button>
<button data-action="delete" data-id="{id}">{delete}</button>
</div>
</div>
</div>"#,
        href = escape_html(&Route::Details(id).fragment()),
        src = escape_html(&project.image_url),
        category_label = messages::CATEGORY_LABEL,
        category = escape_html(&project.category_id),
        stars = render_stars(rating),
        edit = messages::EDIT_LABEL,
        delete = messages::DELETE_LABEL,
    )
}

/// The grid screen: an optional error notice followed by the cards.
/// An empty list renders an empty grid.
pub fn render_grid<'a>(projects: impl IntoIterator<Item = &'a Project>, notice: Option<&str>) -> String {
    let mut html = String::new();
    if let Some(notice) = notice {
        html.push_str(&render_notice(notice));
    }
    html.push_str(r#"<div class="grid">"#);
    for project in projects {
        html.push('\n');
        html.push_str(&render_card(project));
    }
    html.push_str("</div>");
    html
}

/// The details screen with its rating selector.
pub fn render_details(project: &Project, notice: Option<&str>) -> String {
    let rating = display_rating(project);
    let mut options = String::new();
    for value in MIN_RATING..=MAX_RATING {
        let selected = if value == rating { " selected" } else { "" };
        let _ = write!(options, r#"<option value="{value}"{selected}>{value}</option>"#);
    }

    let mut html = String::new();
    if let Some(notice) = notice {
        html.push_str(&render_notice(notice));
    }
    let _ = write!(
        html,
        r#"<div class="details" dir="rtl" data-id="{id}">
<button data-action="close">{close}</button>
<img src="{src}" alt="{name}">
<h2>{name}</h2>
<p>{description}</p>
<p class="muted">{category_label}: {category}</p>
<div class="rating" data-rating="{rating}">{stars}</div>
<select name="rating">{options}</select>
<button data-action="rate">{rate}</button>
</div>"#,
        id = project.id,
        close = messages::CLOSE_LABEL,
        src = escape_html(&project.image_url),
        name = escape_html(&project.name),
        description = escape_html(&project.description),
        category_label = messages::CATEGORY_LABEL,
        category = escape_html(&project.category_id),
        stars = render_stars(rating),
        rate = messages::RATE_LABEL,
    );
    html
}

/// Inline error box.
pub fn render_notice(message: &str) -> String {
    format!(
        r#"<div class="card error" dir="rtl">{}</div>"#,
        escape_html(message)
    )
}

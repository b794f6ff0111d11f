pub mod category;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                   service health
/// /projects                 list (?category=), create
/// /projects/{id}            get, update, delete
/// /categories               fixed category labels
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
        .merge(category::router())
}

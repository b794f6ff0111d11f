use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// GET /categories -> list
pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(category::list))
}

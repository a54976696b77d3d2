//! Route definitions for the `/catalog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET /search  -> search_catalog
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search_catalog))
}

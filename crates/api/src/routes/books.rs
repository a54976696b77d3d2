//! Route definitions for the `/books` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{books, shelf, stats};
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /              -> list_books
/// POST   /              -> create_book
/// GET    /ranked        -> list_ranked
/// GET    /to-read       -> list_to_read
/// GET    /reading       -> list_reading
/// GET    /finished      -> list_finished
/// GET    /stats         -> reading_stats
/// GET    /{id}          -> get_book
/// DELETE /{id}          -> delete_book
/// PUT    /{id}/ratings  -> rate_book
/// POST   /{id}/start    -> start_reading
/// POST   /{id}/finish   -> finish_reading
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route("/ranked", get(books::list_ranked))
        .route("/to-read", get(shelf::list_to_read))
        .route("/reading", get(shelf::list_reading))
        .route("/finished", get(shelf::list_finished))
        .route("/stats", get(stats::reading_stats))
        .route("/{id}", get(books::get_book).delete(books::delete_book))
        .route("/{id}/ratings", put(books::rate_book))
        .route("/{id}/start", post(shelf::start_reading))
        .route("/{id}/finish", post(shelf::finish_reading))
}

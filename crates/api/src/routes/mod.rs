pub mod books;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /books                       list, add from a selected search result
/// /books/ranked                rating-ranked listing (computed rank)
/// /books/to-read               shelf: no dates set
/// /books/reading               shelf: started, not finished
/// /books/finished              shelf: finished
/// /books/stats                 finished books + annual goal progress
/// /books/{id}                  get, delete
/// /books/{id}/ratings          update star/spice/review (PUT)
/// /books/{id}/start            record start date (POST)
/// /books/{id}/finish           record finish date (POST)
///
/// /catalog/search              title search against the primary catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/books", books::router())
        .nest("/catalog", catalog::router())
}

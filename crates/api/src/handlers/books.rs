//! Handlers for book CRUD and ratings.
//!
//! Adding a book runs the select-and-persist flow: the client posts the
//! search result it picked, the enricher fills pages/genre/description
//! best-effort, and the assembled record is inserted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use shelfmark_catalog::SelectedWork;
use shelfmark_core::error::CoreError;
use shelfmark_core::types::DbId;
use shelfmark_db::models::book::{CreateBook, RateBook};
use shelfmark_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// DTO for adding a book from a selected search result.
#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    #[serde(flatten)]
    pub work: SelectedWork,
    /// Also record today as the start date, shelving the book straight
    /// onto currently-reading.
    #[serde(default)]
    pub start_now: bool,
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /api/v1/books
///
/// List the whole collection, best-rated first.
pub async fn list_books(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = BookRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: books }))
}

/// GET /api/v1/books/ranked
///
/// Rated books with their dense rank by star rating. The rank is
/// recomputed by the query on every call; nothing is written.
pub async fn list_ranked(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = BookRepo::list_ranked(&state.pool).await?;

    Ok(Json(DataResponse { data: books }))
}

/// GET /api/v1/books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book = BookRepo::find_by_id(&state.pool, book_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;

    Ok(Json(DataResponse { data: book }))
}

// ---------------------------------------------------------------------------
// Create / delete
// ---------------------------------------------------------------------------

/// POST /api/v1/books
///
/// Add the selected search result to the collection. Enrichment is
/// best-effort: an unreachable catalog leaves the enriched fields null,
/// it never fails the request. A duplicate title is a conflict.
pub async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<AddBookRequest>,
) -> AppResult<impl IntoResponse> {
    if input.work.work_id.trim().is_empty() {
        return Err(AppError::BadRequest("work_id must not be empty".into()));
    }
    if input.work.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }

    let draft = state.enricher.assemble(&input.work).await;

    let create = CreateBook {
        title: draft.title,
        author: draft.author,
        year: draft.year,
        img_url: draft.img_url,
        pages: draft.pages,
        genre: draft.genre,
        description: draft.description,
        date_started: input.start_now.then(|| Utc::now().date_naive()),
    };
    let book = BookRepo::create(&state.pool, &create).await?;

    tracing::info!(book_id = book.id, title = %book.title, "Book added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: book })))
}

/// DELETE /api/v1/books/{id}
///
/// Remove a book from the collection. Irreversible.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BookRepo::delete(&state.pool, book_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }));
    }

    tracing::info!(book_id, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// PUT /api/v1/books/{id}/ratings
///
/// Update star/spice ratings and the review. Absent fields keep their
/// current value.
pub async fn rate_book(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
    Json(input): Json<RateBook>,
) -> AppResult<impl IntoResponse> {
    validate_rating("star_rating", input.star_rating)?;
    validate_rating("spice_rating", input.spice_rating)?;

    let book = BookRepo::update_ratings(
        &state.pool,
        book_id,
        input.star_rating,
        input.spice_rating,
        input.review.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Book",
        id: book_id,
    }))?;

    tracing::info!(book_id, "Book rated");

    Ok(Json(DataResponse { data: book }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Ratings live on an informal 0–5 scale.
fn validate_rating(field: &str, value: Option<f64>) -> AppResult<()> {
    if let Some(v) = value {
        if !(0.0..=5.0).contains(&v) {
            return Err(AppError::BadRequest(format!(
                "{field} must be between 0 and 5"
            )));
        }
    }
    Ok(())
}

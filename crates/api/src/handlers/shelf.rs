//! Handlers for the reading shelves and state transitions.
//!
//! Shelf membership is derived entirely from the two date columns.
//! Recording a start or finish date never clears the other date.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use shelfmark_core::error::CoreError;
use shelfmark_core::types::DbId;
use shelfmark_db::models::book::ReadingDate;
use shelfmark_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shelf listings
// ---------------------------------------------------------------------------

/// GET /api/v1/books/to-read
pub async fn list_to_read(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = BookRepo::list_to_read(&state.pool).await?;

    Ok(Json(DataResponse { data: books }))
}

/// GET /api/v1/books/reading
pub async fn list_reading(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = BookRepo::list_reading(&state.pool).await?;

    Ok(Json(DataResponse { data: books }))
}

/// GET /api/v1/books/finished
pub async fn list_finished(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = BookRepo::list_finished(&state.pool).await?;

    Ok(Json(DataResponse { data: books }))
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

/// POST /api/v1/books/{id}/start
///
/// Record the start date (today unless the body carries one), moving the
/// book to currently-reading.
pub async fn start_reading(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
    body: Option<Json<ReadingDate>>,
) -> AppResult<impl IntoResponse> {
    let date = body
        .and_then(|Json(input)| input.date)
        .unwrap_or_else(|| Utc::now().date_naive());

    let book = BookRepo::set_started(&state.pool, book_id, date)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;

    tracing::info!(book_id, %date, "Book started");

    Ok(Json(DataResponse { data: book }))
}

/// POST /api/v1/books/{id}/finish
///
/// Record the finish date (today unless the body carries one), moving the
/// book to finished. The start date is left as it is.
pub async fn finish_reading(
    State(state): State<AppState>,
    Path(book_id): Path<DbId>,
    body: Option<Json<ReadingDate>>,
) -> AppResult<impl IntoResponse> {
    let date = body
        .and_then(|Json(input)| input.date)
        .unwrap_or_else(|| Utc::now().date_naive());

    let book = BookRepo::set_finished(&state.pool, book_id, date)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Book",
            id: book_id,
        }))?;

    tracing::info!(book_id, %date, "Book finished");

    Ok(Json(DataResponse { data: book }))
}

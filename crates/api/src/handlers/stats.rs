//! Handler for the reading-stats view.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::Serialize;
use shelfmark_core::reading::{self, GoalProgress};
use shelfmark_db::models::book::Book;
use shelfmark_db::repositories::BookRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Stats payload: annual goal progress plus the finished books,
/// serialized as a plain structure for client-side rendering.
#[derive(Debug, Serialize)]
pub struct ReadingStats {
    pub year: i32,
    pub progress: GoalProgress,
    pub finished: Vec<Book>,
}

/// GET /api/v1/books/stats
///
/// Finished books and progress toward the configured annual goal.
pub async fn reading_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let year = Utc::now().year();

    let finished_this_year = BookRepo::count_finished_in_year(&state.pool, year).await?;
    let progress = reading::goal_progress(state.config.reading_goal, finished_this_year as u32);
    let finished = BookRepo::list_finished(&state.pool).await?;

    Ok(Json(DataResponse {
        data: ReadingStats {
            year,
            progress,
            finished,
        },
    }))
}

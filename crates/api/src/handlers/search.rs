//! Handler for catalog title search.
//!
//! Unlike enrichment, search failures are surfaced: there is nothing
//! useful to show the user when the catalog is down, so the upstream
//! error becomes a 502 instead of silently empty results.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use shelfmark_catalog::openlibrary::SearchDoc;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default result count for catalog search.
const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Maximum result count for catalog search.
const MAX_SEARCH_LIMIT: u32 = 50;

/// Query parameters for `GET /api/v1/catalog/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Title query.
    pub q: String,
    /// Maximum results. Defaults to 10.
    pub limit: Option<u32>,
}

/// One search result, trimmed to what the client needs to render a pick
/// list and post the selection back as-is.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub work_id: String,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
    pub cover_id: Option<i64>,
    pub cover_url: Option<String>,
    pub edition_ids: Vec<String>,
    pub median_pages: Option<i64>,
}

impl From<SearchDoc> for SearchResult {
    fn from(doc: SearchDoc) -> Self {
        Self {
            work_id: doc.work_id().to_string(),
            title: doc.title.clone(),
            author: doc.primary_author().to_string(),
            year: doc.first_publish_year,
            cover_id: doc.cover_i,
            cover_url: doc.cover_i.map(shelfmark_catalog::openlibrary::cover_url),
            edition_ids: doc.edition_key,
            median_pages: doc.number_of_pages_median,
        }
    }
}

/// GET /api/v1/catalog/search
///
/// Title search against the primary catalog.
pub async fn search_catalog(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("q must not be empty".into()));
    }
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);

    let docs = state.enricher.openlibrary().search(query, limit).await?;
    let results: Vec<SearchResult> = docs.into_iter().map(SearchResult::from).collect();

    tracing::debug!(query, count = results.len(), "Catalog search executed");

    Ok(Json(DataResponse { data: results }))
}

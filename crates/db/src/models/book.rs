//! Book model and request DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shelfmark_core::reading::{self, ReadingStatus};
use shelfmark_core::types::{DbId, Timestamp};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    /// First-publish year, or 0 when the catalog did not know it.
    pub year: i64,
    pub star_rating: Option<f64>,
    pub spice_rating: Option<f64>,
    pub review: Option<String>,
    pub img_url: Option<String>,
    pub date_started: Option<NaiveDate>,
    pub date_finished: Option<NaiveDate>,
    pub pages: Option<i64>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Book {
    /// Reading status derived from the two date fields.
    pub fn status(&self) -> ReadingStatus {
        reading::reading_status(self.date_started, self.date_finished)
    }
}

/// A book row plus its position in the rating-ranked listing.
///
/// The rank is computed by the query on every read; it is not a column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RankedBook {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub star_rating: Option<f64>,
    pub spice_rating: Option<f64>,
    pub review: Option<String>,
    pub img_url: Option<String>,
    pub genre: Option<String>,
    /// Dense rank by star rating: 1 = highest-rated.
    pub rank: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// A fully assembled book ready for insertion. Built by the catalog
/// enrichment flow; optional fields stay `None` when no source had them.
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub img_url: Option<String>,
    pub pages: Option<i64>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub date_started: Option<NaiveDate>,
}

/// DTO for updating a book's ratings and review. All fields optional;
/// absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct RateBook {
    /// Star rating, 0–5.
    pub star_rating: Option<f64>,
    /// Spice rating, 0–5.
    pub spice_rating: Option<f64>,
    pub review: Option<String>,
}

/// DTO for recording a reading-state change. When `date` is absent the
/// handler substitutes today.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingDate {
    pub date: Option<NaiveDate>,
}

//! Repository for the `books` table.
//!
//! Provides book CRUD, the shelf listings derived from the two date
//! columns, the computed rating-rank projection, and the finished-count
//! used for goal tracking.

use chrono::NaiveDate;
use shelfmark_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::book::{Book, CreateBook, RankedBook};

/// Column list for `books` queries.
const BOOK_COLUMNS: &str = "\
    id, title, author, year, star_rating, spice_rating, review, img_url, \
    date_started, date_finished, pages, genre, description, \
    created_at, updated_at";

/// Provides CRUD operations and shelf listings for books.
pub struct BookRepo;

impl BookRepo {
    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new book.
    ///
    /// Fails with a unique-constraint violation when a book with the same
    /// title already exists; callers map that to a conflict response.
    pub async fn create(pool: &SqlitePool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books \
                 (title, author, year, img_url, pages, genre, description, date_started) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {BOOK_COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.year)
            .bind(input.img_url.as_deref())
            .bind(input.pages)
            .bind(input.genre.as_deref())
            .bind(input.description.as_deref())
            .bind(input.date_started)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book by ID.
    ///
    /// Returns `true` if a book was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    /// List every book, best-rated first, unrated books last.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOK_COLUMNS} FROM books \
             ORDER BY star_rating DESC NULLS LAST, title"
        );
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Rated books with their dense rank by star rating.
    ///
    /// The rank is recomputed by this query on every call, so repeated
    /// reads with unchanged ratings return identical ranks. Unrated books
    /// are not part of the ranked view.
    pub async fn list_ranked(pool: &SqlitePool) -> Result<Vec<RankedBook>, sqlx::Error> {
        sqlx::query_as::<_, RankedBook>(
            "SELECT id, title, author, year, star_rating, spice_rating, review, img_url, genre, \
                    DENSE_RANK() OVER (ORDER BY star_rating DESC) AS rank \
             FROM books \
             WHERE star_rating IS NOT NULL \
             ORDER BY rank, title",
        )
        .fetch_all(pool)
        .await
    }

    /// Books with no start or finish date, oldest additions first.
    pub async fn list_to_read(pool: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOK_COLUMNS} FROM books \
             WHERE date_started IS NULL AND date_finished IS NULL \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Books started but not yet finished, most recently started first.
    pub async fn list_reading(pool: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOK_COLUMNS} FROM books \
             WHERE date_started IS NOT NULL AND date_finished IS NULL \
             ORDER BY date_started DESC, id"
        );
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Finished books, most recently finished first.
    pub async fn list_finished(pool: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOK_COLUMNS} FROM books \
             WHERE date_finished IS NOT NULL \
             ORDER BY date_finished DESC, id"
        );
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Number of books finished in the given calendar year.
    pub async fn count_finished_in_year(
        pool: &SqlitePool,
        year: i32,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM books \
             WHERE date_finished IS NOT NULL \
               AND strftime('%Y', date_finished) = $1",
        )
        .bind(format!("{year:04}"))
        .fetch_one(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Update a book's ratings and review. Absent fields are preserved.
    ///
    /// Returns `None` if no book with the given ID exists.
    pub async fn update_ratings(
        pool: &SqlitePool,
        id: DbId,
        star_rating: Option<f64>,
        spice_rating: Option<f64>,
        review: Option<&str>,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET \
                 star_rating = COALESCE($2, star_rating), \
                 spice_rating = COALESCE($3, spice_rating), \
                 review = COALESCE($4, review), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {BOOK_COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(star_rating)
            .bind(spice_rating)
            .bind(review)
            .fetch_optional(pool)
            .await
    }

    /// Record the start date. Leaves the finish date untouched.
    ///
    /// Returns `None` if no book with the given ID exists.
    pub async fn set_started(
        pool: &SqlitePool,
        id: DbId,
        date: NaiveDate,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET \
                 date_started = $2, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {BOOK_COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// Record the finish date. Leaves the start date untouched, so a book
    /// logged straight to finished keeps a NULL start date.
    ///
    /// Returns `None` if no book with the given ID exists.
    pub async fn set_finished(
        pool: &SqlitePool,
        id: DbId,
        date: NaiveDate,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET \
                 date_finished = $2, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = $1 \
             RETURNING {BOOK_COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }
}

//! HTTP-level integration tests for catalog search and the enrichment
//! paths of the add-book flow.
//!
//! The upstream catalogs are faked by real axum routers bound to
//! ephemeral local ports, so the reqwest clients exercise their full
//! request/parse path.

mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum::Router;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Fake upstreams
// ---------------------------------------------------------------------------

/// Fake Open Library: one search hit, two known works, one known edition.
fn fake_openlibrary() -> Router {
    use axum::routing::get;

    async fn search() -> Json<serde_json::Value> {
        Json(json!({
            "numFound": 1,
            "docs": [{
                "key": "/works/OL1W",
                "title": "Jonathan Strange & Mr Norrell",
                "author_name": ["Susanna Clarke", "Someone Else"],
                "first_publish_year": 2004,
                "cover_i": 12345,
                "edition_key": ["ED1", "ED2"],
                "number_of_pages_median": 782
            }]
        }))
    }

    async fn work(Path(key): Path<String>) -> axum::response::Response {
        match key.trim_end_matches(".json") {
            "OL1W" => Json(json!({
                "title": "Jonathan Strange & Mr Norrell",
                "subjects": ["Fantasy fiction", "Magicians", "Fiction"],
                "description": {
                    "type": "/type/text",
                    "value": "English magic returns."
                }
            }))
            .into_response(),
            "OL2W" => Json(json!({
                "title": "Leviathan Wakes",
                "subjects": ["Science fiction"]
            }))
            .into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn edition(Path(key): Path<String>) -> axum::response::Response {
        match key.trim_end_matches(".json") {
            "ED1" => Json(json!({"number_of_pages": 310})).into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    Router::new()
        .route("/search.json", get(search))
        .route("/works/{key}", get(work))
        .route("/books/{key}", get(edition))
}

/// Fake Google Books: one volume, regardless of query.
fn fake_googlebooks() -> Router {
    use axum::routing::get;

    async fn volumes() -> Json<serde_json::Value> {
        Json(json!({
            "totalItems": 1,
            "items": [{
                "volumeInfo": {
                    "pageCount": 562,
                    "description": "Epic space opera.",
                    "categories": ["Juvenile Fiction / Horror"]
                }
            }]
        }))
    }

    Router::new().route("/volumes", get(volumes))
}

/// Fake Open Library whose search endpoint always fails.
fn failing_openlibrary() -> Router {
    use axum::routing::get;

    Router::new().route("/search.json", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_returns_trimmed_results(pool: SqlitePool) {
    let mut config = common::test_config();
    config.openlibrary_base_url = common::spawn_fake_upstream(fake_openlibrary()).await;

    let app = common::build_test_app_with(pool, config);
    let response = get(app, "/api/v1/catalog/search?q=strange").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let results = json["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["work_id"], "OL1W");
    assert_eq!(results[0]["author"], "Susanna Clarke");
    assert_eq!(results[0]["year"], 2004);
    assert_eq!(results[0]["median_pages"], 782);
    assert_eq!(
        results[0]["cover_url"],
        "https://covers.openlibrary.org/b/id/12345-L.jpg"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_empty_query_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/catalog/search?q=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_upstream_failure_returns_502(pool: SqlitePool) {
    let mut config = common::test_config();
    config.openlibrary_base_url = common::spawn_fake_upstream(failing_openlibrary()).await;

    let app = common::build_test_app_with(pool, config);
    let response = get(app, "/api/v1/catalog/search?q=strange").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_unreachable_upstream_returns_502(pool: SqlitePool) {
    // Default test config points at an unroutable upstream.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/catalog/search?q=strange").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ---------------------------------------------------------------------------
// Enrichment on add
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_book_enriched_from_primary_catalog(pool: SqlitePool) {
    let mut config = common::test_config();
    config.openlibrary_base_url = common::spawn_fake_upstream(fake_openlibrary()).await;

    let app = common::build_test_app_with(pool, config);
    let response = post_json(
        app,
        "/api/v1/books",
        json!({
            "work_id": "OL1W",
            "title": "Jonathan Strange & Mr Norrell",
            "author": "Susanna Clarke",
            "year": 2004,
            "cover_id": 12345,
            "edition_ids": ["ED1", "ED2"],
            "median_pages": 782
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["genre"], "Fantasy");
    assert_eq!(json["data"]["pages"], 310);
    assert_eq!(json["data"]["description"], "English magic returns.");
    assert_eq!(
        json["data"]["img_url"],
        "https://covers.openlibrary.org/b/id/12345-L.jpg"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_pages_fall_back_to_search_median(pool: SqlitePool) {
    let mut config = common::test_config();
    config.openlibrary_base_url = common::spawn_fake_upstream(fake_openlibrary()).await;

    // ED9 is unknown to the catalog, so the median from the search
    // result is the only page source left.
    let app = common::build_test_app_with(pool, config);
    let response = post_json(
        app,
        "/api/v1/books",
        json!({
            "work_id": "OL2W",
            "title": "Leviathan Wakes",
            "author": "James S. A. Corey",
            "year": 2011,
            "edition_ids": ["ED9"],
            "median_pages": 449
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["pages"], 449);
    assert_eq!(json["data"]["genre"], "Science Fiction");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_secondary_catalog_fills_missing_fields(pool: SqlitePool) {
    let mut config = common::test_config();
    config.openlibrary_base_url = common::spawn_fake_upstream(fake_openlibrary()).await;
    config.google_books_base_url = common::spawn_fake_upstream(fake_googlebooks()).await;

    // OL2W has a genre signal but no description, editions, or median,
    // so pages and description come from the secondary catalog. The
    // secondary categories must NOT override the non-generic genre.
    let app = common::build_test_app_with(pool, config);
    let response = post_json(
        app,
        "/api/v1/books",
        json!({
            "work_id": "OL2W",
            "title": "Leviathan Wakes",
            "author": "James S. A. Corey",
            "year": 2011
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["pages"], 562);
    assert_eq!(json["data"]["description"], "Epic space opera.");
    assert_eq!(json["data"]["genre"], "Science Fiction");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_secondary_categories_classify_unknown_work(pool: SqlitePool) {
    let mut config = common::test_config();
    config.openlibrary_base_url = common::spawn_fake_upstream(fake_openlibrary()).await;
    config.google_books_base_url = common::spawn_fake_upstream(fake_googlebooks()).await;

    // OL9W is unknown to the primary catalog: no subjects at all, so the
    // secondary categories drive the classification.
    let app = common::build_test_app_with(pool, config);
    let response = post_json(
        app,
        "/api/v1/books",
        json!({
            "work_id": "OL9W",
            "title": "Some Obscure Book",
            "author": "Nobody Known"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["genre"], "Horror");
    assert_eq!(json["data"]["pages"], 562);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_book_survives_dead_upstreams(pool: SqlitePool) {
    // Both catalogs unreachable: every enriched field degrades to null,
    // the insert itself must still succeed.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/books",
        json!({
            "work_id": "OL1W",
            "title": "Offline Add",
            "author": "Test Author"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["pages"].is_null());
    assert!(json["data"]["description"].is_null());
    assert_eq!(json["data"]["genre"], "Fiction");
    assert_eq!(json["data"]["year"], 0);
}

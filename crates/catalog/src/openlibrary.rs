//! REST client for the Open Library catalog.
//!
//! Wraps the title-search, work-detail, and edition-detail endpoints
//! using [`reqwest`]. Works are the abstract book records carrying
//! subjects and descriptions; editions are specific printings carrying
//! page counts.

use serde::Deserialize;

use crate::error::{parse_json, CatalogError};

/// Production base URL for the Open Library API.
pub const OPENLIBRARY_URL: &str = "https://openlibrary.org";

/// Production base URL for the cover-image CDN.
const COVERS_URL: &str = "https://covers.openlibrary.org";

/// HTTP client for the Open Library API.
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

/// One document from the search endpoint's `docs` list.
///
/// Every field is optional-tolerant: search documents vary wildly in
/// which metadata they carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDoc {
    /// Work key, e.g. `/works/OL45883W`.
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub first_publish_year: Option<i64>,
    /// Numeric cover identifier for the cover CDN.
    pub cover_i: Option<i64>,
    /// Edition identifiers, e.g. `OL7353617M`.
    #[serde(default)]
    pub edition_key: Vec<String>,
    /// Free-text subject hints.
    #[serde(default)]
    pub subject: Vec<String>,
    /// Median page count across editions, when the index knows it.
    pub number_of_pages_median: Option<i64>,
}

impl SearchDoc {
    /// The bare work identifier with the `/works/` prefix stripped.
    pub fn work_id(&self) -> &str {
        self.key.strip_prefix("/works/").unwrap_or(&self.key)
    }

    /// First listed author, or `"Unknown"`.
    pub fn primary_author(&self) -> &str {
        self.author_name.first().map_or("Unknown", String::as_str)
    }
}

/// Wire shape of the search endpoint response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

/// Extended metadata for a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    description: Option<DescriptionField>,
}

impl WorkDetail {
    /// The work description, regardless of which wire shape it used.
    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().map(DescriptionField::text)
    }
}

/// Work descriptions arrive either as a bare string or as a
/// `{ "type": "/type/text", "value": "..." }` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DescriptionField {
    Text(String),
    Object { value: String },
}

impl DescriptionField {
    fn text(&self) -> &str {
        match self {
            DescriptionField::Text(s) => s,
            DescriptionField::Object { value } => value,
        }
    }
}

/// Wire shape of an edition record; only the page count is of interest.
#[derive(Debug, Deserialize)]
struct EditionDetail {
    number_of_pages: Option<i64>,
}

impl OpenLibraryClient {
    /// Create a client for the given base URL (see [`OPENLIBRARY_URL`]).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: crate::http_client(),
            base_url: base_url.into(),
        }
    }

    /// Search works by title.
    ///
    /// Sends `GET /search.json?title=…&limit=…` and returns the raw
    /// result documents, at most `limit` of them.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchDoc>, CatalogError> {
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[("title", query), ("limit", &limit.to_string())])
            .send()
            .await?;

        let payload: SearchResponse = parse_json(response).await?;
        Ok(payload.docs)
    }

    /// Fetch extended metadata for a work.
    ///
    /// Sends `GET /works/{id}.json`. Returns `Ok(None)` when the catalog
    /// does not know the work.
    pub async fn work(&self, work_id: &str) -> Result<Option<WorkDetail>, CatalogError> {
        let response = self
            .client
            .get(format!("{}/works/{}.json", self.base_url, work_id))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(parse_json(response).await?))
    }

    /// Fetch the page count of a specific edition.
    ///
    /// Sends `GET /books/{id}.json`. Returns `Ok(None)` when the edition
    /// is unknown or carries no page count.
    pub async fn edition_pages(&self, edition_id: &str) -> Result<Option<i64>, CatalogError> {
        let response = self
            .client
            .get(format!("{}/books/{}.json", self.base_url, edition_id))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let detail: EditionDetail = parse_json(response).await?;
        Ok(detail.number_of_pages)
    }
}

/// Cover image URL for a numeric cover identifier.
///
/// Deterministic template; the CDN serves a placeholder when the cover
/// does not exist, so there is no existence check.
pub fn cover_url(cover_id: i64) -> String {
    format!("{COVERS_URL}/b/id/{cover_id}-L.jpg")
}

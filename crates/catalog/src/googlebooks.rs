//! REST client for the Google Books volumes API.
//!
//! Used only as a fallback source: when the primary catalog yields no
//! usable page count, description, or genre signal, the first matching
//! volume is consulted.

use serde::Deserialize;

use crate::error::{parse_json, CatalogError};

/// Production base URL for the Google Books API.
pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1";

/// HTTP client for the Google Books volumes endpoint.
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// The fallback-relevant slice of a volume record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub page_count: Option<i64>,
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VolumeItem {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<VolumeItem>,
}

impl GoogleBooksClient {
    /// Create a client for the given base URL (see [`GOOGLE_BOOKS_URL`]).
    ///
    /// The API key is optional; without one the public quota applies.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: crate::http_client(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Look up a volume by title and author.
    ///
    /// Sends `GET /volumes?q=intitle:… inauthor:…&maxResults=1` and
    /// returns the first matching volume, or `Ok(None)` when nothing
    /// matches.
    pub async fn lookup(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<VolumeInfo>, CatalogError> {
        let query = format!("intitle:{title} inauthor:{author}");

        let mut request = self
            .client
            .get(format!("{}/volumes", self.base_url))
            .query(&[("q", query.as_str()), ("maxResults", "1")]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        let payload: VolumesResponse = parse_json(response).await?;

        Ok(payload.items.into_iter().next().map(|item| item.volume_info))
    }
}

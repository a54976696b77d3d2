//! Book assembly: selected search result + enrichment lookups.
//!
//! Every lookup here is best-effort. A failing or empty upstream leaves
//! the corresponding draft field `None`; failures are logged, never
//! propagated. The worst-case path is bounded: one work detail, three
//! edition probes, one secondary-catalog lookup.

use serde::{Deserialize, Serialize};
use shelfmark_core::genre::{self, DEFAULT_GENRE};

use crate::googlebooks::{GoogleBooksClient, VolumeInfo};
use crate::openlibrary::{cover_url, OpenLibraryClient, WorkDetail};

/// How many editions to probe for a page count before giving up.
const EDITION_PROBE_LIMIT: usize = 3;

/// The search result the user picked, as posted back by the client.
///
/// Carries everything the search document already knew so assembly does
/// not have to repeat the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedWork {
    /// Bare work identifier, e.g. `OL45883W`.
    pub work_id: String,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
    /// Numeric cover identifier for the cover CDN.
    pub cover_id: Option<i64>,
    /// Edition identifiers, in search-result order.
    #[serde(default)]
    pub edition_ids: Vec<String>,
    /// Median page count from the search index, the last pages fallback.
    pub median_pages: Option<i64>,
}

/// A fully assembled book, ready to persist.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    /// First-publish year, or 0 when unknown.
    pub year: i64,
    pub img_url: Option<String>,
    pub pages: Option<i64>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

/// Combines the primary and secondary catalog clients into the
/// enrichment flow.
pub struct Enricher {
    openlibrary: OpenLibraryClient,
    googlebooks: GoogleBooksClient,
}

impl Enricher {
    pub fn new(openlibrary: OpenLibraryClient, googlebooks: GoogleBooksClient) -> Self {
        Self {
            openlibrary,
            googlebooks,
        }
    }

    /// The primary catalog client, also used directly by the search flow.
    pub fn openlibrary(&self) -> &OpenLibraryClient {
        &self.openlibrary
    }

    /// Assemble a persistable draft from a selected search result.
    ///
    /// Base fields come from the selection itself; pages, genre, and
    /// description are enriched from the primary catalog with the
    /// secondary catalog as fallback. Infallible: missing data stays
    /// `None`.
    pub async fn assemble(&self, work: &SelectedWork) -> BookDraft {
        let detail = self.fetch_work(&work.work_id).await;

        let subjects = detail
            .as_ref()
            .map(|d| d.subjects.clone())
            .unwrap_or_default();
        let mut description = detail
            .as_ref()
            .and_then(|d| d.description().map(str::to_string));
        let mut pages = self.probe_editions(&work.edition_ids).await;
        if pages.is_none() {
            pages = work.median_pages.filter(|p| *p > 0);
        }

        let mut classified = if subjects.is_empty() {
            None
        } else {
            Some(genre::classify(&subjects))
        };

        // Secondary catalog: consulted only when the primary left a gap —
        // no genre signal beyond the default, or missing pages/description.
        let genre_is_generic = classified.as_deref().map_or(true, |g| g == DEFAULT_GENRE);
        if genre_is_generic || pages.is_none() || description.is_none() {
            if let Some(volume) = self.fetch_secondary(&work.title, &work.author).await {
                pages = pages.or(volume.page_count.filter(|p| *p > 0));
                description = description.or(volume.description);
                if genre_is_generic && !volume.categories.is_empty() {
                    classified = Some(genre::classify(&volume.categories));
                }
            }
        }

        BookDraft {
            title: work.title.clone(),
            author: work.author.clone(),
            year: work.year.unwrap_or(0),
            img_url: work.cover_id.map(cover_url),
            pages,
            genre: Some(classified.unwrap_or_else(|| DEFAULT_GENRE.to_string())),
            description,
        }
    }

    // ---- best-effort lookup helpers ----

    async fn fetch_work(&self, work_id: &str) -> Option<WorkDetail> {
        match self.openlibrary.work(work_id).await {
            Ok(Some(detail)) => Some(detail),
            Ok(None) => {
                tracing::debug!(work_id, "work not found in primary catalog");
                None
            }
            Err(err) => {
                tracing::warn!(work_id, error = %err, "work detail lookup failed");
                None
            }
        }
    }

    /// Probe up to the first [`EDITION_PROBE_LIMIT`] editions for a
    /// positive page count.
    async fn probe_editions(&self, edition_ids: &[String]) -> Option<i64> {
        for edition_id in edition_ids.iter().take(EDITION_PROBE_LIMIT) {
            match self.openlibrary.edition_pages(edition_id).await {
                Ok(Some(pages)) if pages > 0 => return Some(pages),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(edition_id = %edition_id, error = %err, "edition lookup failed");
                }
            }
        }
        None
    }

    async fn fetch_secondary(&self, title: &str, author: &str) -> Option<VolumeInfo> {
        match self.googlebooks.lookup(title, author).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(title, error = %err, "secondary catalog lookup failed");
                None
            }
        }
    }
}

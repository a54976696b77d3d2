//! Upstream book-catalog clients and enrichment.
//!
//! The primary catalog (Open Library) provides search, work details, and
//! edition page counts; Google Books serves as a best-effort fallback for
//! pages, description, and categories. [`enrich::Enricher`] combines both
//! into a persistable book draft.

use std::time::Duration;

pub mod enrich;
pub mod error;
pub mod googlebooks;
pub mod openlibrary;

pub use enrich::{BookDraft, Enricher, SelectedWork};
pub use error::CatalogError;
pub use googlebooks::GoogleBooksClient;
pub use openlibrary::OpenLibraryClient;

/// Per-request timeout for upstream catalog calls. Both catalogs are
/// public third-party services; a hung request must not stall the
/// handling request indefinitely.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the shared HTTP client used by the catalog clients.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}

//! Error type shared by the catalog clients.

use serde::de::DeserializeOwned;

/// Errors from the upstream catalog HTTP layer.
///
/// "Not found" is not an error: lookups return `Ok(None)` so callers can
/// distinguish a missing record from a failing upstream and decide
/// whether to surface, retry, or degrade.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The catalog returned a 2xx response whose body did not match the
    /// expected shape.
    #[error("Malformed catalog response: {0}")]
    Malformed(String),
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`CatalogError::Status`] containing the
/// status and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, CatalogError> {
    let response = ensure_success(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| CatalogError::Malformed(e.to_string()))
}

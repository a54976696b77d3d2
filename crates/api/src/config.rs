use shelfmark_catalog::googlebooks::GOOGLE_BOOKS_URL;
use shelfmark_catalog::openlibrary::OPENLIBRARY_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Annual reading goal used by the stats view (default: `50`).
    pub reading_goal: u32,
    /// Base URL of the primary catalog API.
    pub openlibrary_base_url: String,
    /// Base URL of the secondary catalog API.
    pub google_books_base_url: String,
    /// Optional API key for the secondary catalog.
    pub google_books_api_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                              |
    /// |-------------------------|--------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                            |
    /// | `PORT`                  | `3000`                               |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                 |
    /// | `READING_GOAL`          | `50`                                 |
    /// | `OPENLIBRARY_BASE_URL`  | `https://openlibrary.org`            |
    /// | `GOOGLE_BOOKS_BASE_URL` | `https://www.googleapis.com/books/v1`|
    /// | `GOOGLE_BOOKS_API_KEY`  | unset                                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let reading_goal: u32 = std::env::var("READING_GOAL")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .expect("READING_GOAL must be a valid u32");

        let openlibrary_base_url =
            std::env::var("OPENLIBRARY_BASE_URL").unwrap_or_else(|_| OPENLIBRARY_URL.into());

        let google_books_base_url =
            std::env::var("GOOGLE_BOOKS_BASE_URL").unwrap_or_else(|_| GOOGLE_BOOKS_URL.into());

        let google_books_api_key = std::env::var("GOOGLE_BOOKS_API_KEY").ok();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            reading_goal,
            openlibrary_base_url,
            google_books_base_url,
            google_books_api_key,
        }
    }
}

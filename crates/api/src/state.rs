use std::sync::Arc;

use shelfmark_catalog::Enricher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Constructed explicitly at startup and passed in; nothing here is a
/// process-global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shelfmark_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalog clients and enrichment flow.
    pub enricher: Arc<Enricher>,
}

use std::sync::Arc;

use cinebase_graph::QueryEngine;

use crate::catalog::CatalogService;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinebase_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalogue service (validation, poster enrichment, persistence).
    pub catalog: CatalogService,
    /// GraphQL engine, built once at start-up.
    pub query_engine: QueryEngine,
}

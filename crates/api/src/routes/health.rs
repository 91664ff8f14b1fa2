//! Liveness and catalogue readiness at `/health`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the catalogue can serve reads, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the genre table has been seeded by the migrations.
    pub genres_seeded: bool,
    /// Whether new movies without an image get a poster looked up.
    pub poster_lookup: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = cinebase_db::health_check(&state.pool).await.is_ok();
    let genres_seeded = match state.catalog.list_genres().await {
        Ok(genres) => !genres.is_empty(),
        Err(e) => {
            tracing::warn!(error = %e, "Genre lookup failed during health check");
            false
        }
    };

    let status = if db_healthy && genres_seeded {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        genres_seeded,
        poster_lookup: state.catalog.poster_lookup_enabled(),
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

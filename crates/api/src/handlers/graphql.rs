//! Handler for the ad-hoc `/graphql` query endpoint.

use axum::extract::State;
use axum::Json;
use cinebase_graph::QueryResult;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /graphql`.
#[derive(Debug, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
}

/// POST /api/v1/graphql
///
/// Evaluates the query against a fresh snapshot of every movie. The response
/// is the engine result itself (`{ "data": ... }`), not the REST envelope.
pub async fn execute(
    State(state): State<AppState>,
    Json(input): Json<GraphQlRequest>,
) -> AppResult<Json<QueryResult>> {
    let snapshot = state.catalog.snapshot().await?;
    let result = state.query_engine.run_query(snapshot, &input.query).await?;
    Ok(Json(result))
}

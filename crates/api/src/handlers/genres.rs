//! Handlers for the `/genres` resource.

use axum::extract::State;
use axum::Json;
use cinebase_db::models::genre::Genre;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Genre>>>> {
    let genres = state.catalog.list_genres().await?;
    Ok(Json(DataResponse { data: genres }))
}

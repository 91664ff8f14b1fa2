//! Public read handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use cinebase_core::types::DbId;
use cinebase_db::models::movie::{Movie, MovieWithGenres};

use crate::error::AppResult;
use crate::query::MovieListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies?genre={id}
///
/// All movies ordered by title, optionally restricted to one genre.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = state.catalog.list_movies(params.genre).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MovieWithGenres>>> {
    let movie = state.catalog.get_movie(id).await?;
    Ok(Json(DataResponse { data: movie }))
}

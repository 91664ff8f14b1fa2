//! Admin handlers for catalogue management under `/admin/movies`.
//!
//! Every handler requires the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinebase_core::catalog::MovieRequest;
use cinebase_core::types::DbId;
use cinebase_db::models::movie::{Movie, MovieWithGenres};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/movies
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = state.catalog.list_movies(None).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// POST /api/v1/admin/movies
///
/// Validates the payload, fills in a poster when none was supplied and
/// inserts the movie with its genre associations.
pub async fn create(
    RequireAdmin(admin_id): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<MovieRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Movie>>)> {
    let movie = state.catalog.add_movie(input).await?;
    tracing::debug!(movie_id = movie.id, user_id = admin_id, "Admin created movie");
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// GET /api/v1/admin/movies/{id}
///
/// Loads a movie for editing, including `genres_int_array`.
pub async fn get_for_edit(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MovieWithGenres>>> {
    let movie = state.catalog.get_movie_for_edit(id).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// PUT /api/v1/admin/movies/{id}
pub async fn update(
    RequireAdmin(admin_id): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MovieRequest>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = state.catalog.update_movie(id, input).await?;
    tracing::debug!(movie_id = id, user_id = admin_id, "Admin updated movie");
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/admin/movies/{id}
pub async fn delete(
    RequireAdmin(admin_id): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_movie(id).await?;
    tracing::debug!(movie_id = id, user_id = admin_id, "Admin deleted movie");
    Ok(StatusCode::NO_CONTENT)
}

//! Route definitions for the `/admin` catalogue-management surface.
//!
//! Authorization is enforced per handler by the `RequireAdmin` extractor.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_movies;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /movies        -> list
/// POST   /movies        -> create
/// GET    /movies/{id}   -> get_for_edit
/// PUT    /movies/{id}   -> update
/// DELETE /movies/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(admin_movies::list).post(admin_movies::create))
        .route(
            "/movies/{id}",
            get(admin_movies::get_for_edit)
                .put(admin_movies::update)
                .delete(admin_movies::delete),
        )
}

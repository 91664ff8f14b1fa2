pub mod admin;
pub mod auth;
pub mod genres;
pub mod graphql;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                     list (?genre={id}) (public)
/// /movies/{id}                get with genres (public)
/// /genres                     list (public)
/// /graphql                    ad-hoc query over all movies (public, POST)
///
/// /auth/signup                create account (public)
/// /auth/login                 issue access token (public)
///
/// /admin/movies               list, create (admin only)
/// /admin/movies/{id}          get for edit, update, delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/genres", genres::router())
        .nest("/graphql", graphql::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}

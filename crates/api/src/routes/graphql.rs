use axum::routing::post;
use axum::Router;

use crate::handlers::graphql;
use crate::state::AppState;

/// Routes mounted at `/graphql`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(graphql::execute))
}

//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id (detail aggregation)
/// PUT    /{id}           -> update (full replace)
/// DELETE /{id}           -> delete (guarded)
/// GET    /{id}/movies    -> list_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(director::list).post(director::create))
        .route(
            "/{id}",
            get(director::get_by_id)
                .put(director::update)
                .delete(director::delete),
        )
        .route("/{id}/movies", get(director::list_movies))
}

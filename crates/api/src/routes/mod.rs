pub mod director;
pub mod health;
pub mod movie;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog                         counts summary
///
/// /directors                       list, create
/// /directors/{id}                  detail aggregation, update, delete
/// /directors/{id}/movies           dependent movie list
///
/// /movies                          list (directors resolved), create
/// /movies/{id}                     detail (director resolved), update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(handlers::catalog::summary))
        .nest("/directors", director::router())
        .nest("/movies", movie::router())
}

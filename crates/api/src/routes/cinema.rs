//! Route definitions for the cinema resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cinema;
use crate::state::AppState;

/// Routes for `/cinema`.
///
/// ```text
/// POST   /cinema          -> create
/// GET    /cinema          -> list
/// GET    /cinema/{id}     -> get_by_id
/// PUT    /cinema/{id}     -> update
/// DELETE /cinema/{id}     -> delete (501)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cinema", get(cinema::list).post(cinema::create))
        .route(
            "/cinema/{id}",
            get(cinema::get_by_id)
                .put(cinema::update)
                .delete(cinema::delete),
        )
}

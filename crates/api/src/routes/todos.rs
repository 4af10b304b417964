//! Route definitions for the `/todos` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// DELETE /                 -> delete_all
/// DELETE /bulk-completed   -> delete_completed
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
///
/// `bulk-completed` is a literal segment; the router matches it ahead of
/// the `{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos::list).post(todos::create).delete(todos::delete_all),
        )
        .route("/bulk-completed", delete(todos::delete_completed))
        .route(
            "/{id}",
            get(todos::get_by_id)
                .put(todos::update)
                .delete(todos::delete),
        )
}

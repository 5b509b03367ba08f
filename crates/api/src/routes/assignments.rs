//! Route definitions for the `/assignments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assignment, reader_history};
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET    /                        -> list_assignments (?page, page_size, search, status_id)
/// POST   /                        -> create_assignment
/// GET    /{id}                    -> get_assignment
/// PUT    /{id}                    -> update_assignment
/// DELETE /{id}                    -> delete_assignment
/// GET    /{id}/readers            -> list_readers
/// POST   /{id}/readers            -> reassign_reader
/// GET    /{id}/readers/current    -> current_reader
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(assignment::list_assignments).post(assignment::create_assignment),
        )
        .route(
            "/{id}",
            get(assignment::get_assignment)
                .put(assignment::update_assignment)
                .delete(assignment::delete_assignment),
        )
        .route(
            "/{id}/readers",
            get(reader_history::list_readers).post(reader_history::reassign_reader),
        )
        .route("/{id}/readers/current", get(reader_history::current_reader))
}

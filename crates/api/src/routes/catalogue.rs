//! Route definitions for reference data: `/statuses`, `/books`, `/users`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{book, status, user};
use crate::state::AppState;

/// Routes mounted at `/statuses`.
///
/// ```text
/// GET    /          -> list_statuses
/// ```
pub fn statuses_router() -> Router<AppState> {
    Router::new().route("/", get(status::list_statuses))
}

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /          -> search_books (?q, limit)
/// GET    /{id}      -> get_book
/// ```
pub fn books_router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::search_books))
        .route("/{id}", get(book::get_book))
}

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /readers   -> search_readers (?q, limit)
/// ```
pub fn users_router() -> Router<AppState> {
    Router::new().route("/readers", get(user::search_readers))
}

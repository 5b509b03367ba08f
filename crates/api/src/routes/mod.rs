pub mod assignments;
pub mod catalogue;
pub mod health;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assignments                                     list, create (staff)
/// /assignments/{id}                                get, update, delete
/// /assignments/{id}/readers                        reader history, reassign
/// /assignments/{id}/readers/current                current reader
///
/// /orders                                          search / recent, create (staff)
/// /orders/{id}                                     get, update
///
/// /statuses                                        status reference data (auth)
/// /books                                           book search (auth)
/// /books/{id}                                      book lookup
/// /users/readers                                   reader search (staff)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assignments", assignments::router())
        .nest("/orders", orders::router())
        .nest("/statuses", catalogue::statuses_router())
        .nest("/books", catalogue::books_router())
        .nest("/users", catalogue::users_router())
}

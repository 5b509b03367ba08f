//! Route definitions for the `/orders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /          -> list_orders (?q, limit)
/// POST   /          -> create_order
/// GET    /{id}      -> get_order
/// PUT    /{id}      -> update_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list_orders).post(order::create_order))
        .route("/{id}", get(order::get_order).put(order::update_order))
}

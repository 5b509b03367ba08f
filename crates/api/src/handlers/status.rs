//! Handlers for workflow status reference data.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use mediatheque_db::repositories::StatusRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /statuses
///
/// All statuses ordered by `sort_order`.
pub async fn list_statuses(
    _auth: RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let statuses = StatusRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: statuses }))
}

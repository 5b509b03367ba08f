//! Handlers for user lookups.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mediatheque_core::search::{clamp_limit, validate_reader_query, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use mediatheque_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /users/readers?q=&limit=
///
/// Active readers whose name, first/last name or email match `q`
/// (at least 2 characters).
pub async fn search_readers(
    _auth: RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let q = params.q.unwrap_or_default();
    validate_reader_query(&q).map_err(AppError::BadRequest)?;
    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);

    let readers = UserRepo::search_readers(&state.pool, q.trim(), limit).await?;
    Ok(Json(DataResponse { data: readers }))
}

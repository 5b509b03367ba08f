//! Handlers for catalogue lookups.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mediatheque_core::error::CoreError;
use mediatheque_core::search::{clamp_limit, normalize_term, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use mediatheque_core::types::DbId;
use mediatheque_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /books?q=&limit=
///
/// `{id, title, author}` summaries matching the title or author.
pub async fn search_books(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = normalize_term(params.q.as_deref()).ok_or_else(|| {
        AppError::BadRequest("Search query 'q' is required".to_string())
    })?;
    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);

    let books = BookRepo::search(&state.pool, term, limit).await?;
    Ok(Json(DataResponse { data: books }))
}

/// GET /books/{id}
pub async fn get_book(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(DataResponse { data: book }))
}

//! Handlers for an assignment's reader history.
//!
//! The history is append-only. Reassigning inserts a new entry; the newest
//! entry is the current reader.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mediatheque_core::assignment::{
    check_reassignment, history_note, validate_notes, DEFAULT_REASSIGNMENT_NOTE,
};
use mediatheque_core::error::CoreError;
use mediatheque_core::types::DbId;
use mediatheque_db::models::reader_history::ReassignReader;
use mediatheque_db::repositories::{AssignmentRepo, ReaderHistoryRepo};
use mediatheque_db::DbPool;

use super::find_reader;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_assignment(pool: &DbPool, id: DbId) -> AppResult<()> {
    AssignmentRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Assignment",
                id,
            })
        })?;
    Ok(())
}

/// GET /assignments/{id}/readers
///
/// Full history, newest first.
pub async fn list_readers(
    _auth: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_assignment(&state.pool, id).await?;
    let history = ReaderHistoryRepo::list_for_assignment(&state.pool, id).await?;
    Ok(Json(DataResponse { data: history }))
}

/// GET /assignments/{id}/readers/current
///
/// The current reader, or `null` when no reader was ever assigned.
pub async fn current_reader(
    _auth: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_assignment(&state.pool, id).await?;
    let current = ReaderHistoryRepo::current_reader(&state.pool, id).await?;
    Ok(Json(DataResponse { data: current }))
}

/// POST /assignments/{id}/readers
///
/// Reassign the reader. Rejected with 400 `NO_CHANGE` when the reader is
/// already current; nothing is written in that case.
pub async fn reassign_reader(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<ReassignReader>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let reader_id = input
        .reader_id
        .ok_or_else(|| CoreError::Validation("A reader (reader_id) is required".into()))?;
    validate_notes(input.notes.as_deref())?;

    ensure_assignment(&state.pool, id).await?;
    find_reader(&state.pool, reader_id).await?;

    let current = ReaderHistoryRepo::current_reader(&state.pool, id).await?;
    let previous_reader_id = current.map(|entry| entry.reader_id);
    check_reassignment(previous_reader_id, reader_id)?;

    let notes = history_note(input.notes.as_deref(), DEFAULT_REASSIGNMENT_NOTE);
    let entry = ReaderHistoryRepo::append(&state.pool, id, reader_id, &notes).await?;

    tracing::info!(
        user_id = auth.user_id,
        assignment_id = id,
        reader_id,
        previous_reader_id = ?previous_reader_id,
        history_id = entry.id,
        "Reader reassigned"
    );

    let history = ReaderHistoryRepo::list_for_assignment(&state.pool, id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: history })))
}

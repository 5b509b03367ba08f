//! Handlers for assignments.
//!
//! Reader changes never go through create/update: the initial reader is
//! written to the history log at creation and later changes use the
//! reassignment endpoint in [`super::reader_history`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mediatheque_core::assignment::{
    seed_from_order, validate_notes, validate_required, OrderSeed, INITIAL_ASSIGNMENT_NOTE,
};
use mediatheque_core::error::CoreError;
use mediatheque_core::pagination::PageRequest;
use mediatheque_core::types::DbId;
use mediatheque_db::models::assignment::{
    AssignmentDetail, AssignmentFilter, CreateAssignment, InitialReader, NewAssignment,
    UpdateAssignment,
};
use mediatheque_db::repositories::{AssignmentRepo, OrderRepo, ReaderHistoryRepo};
use mediatheque_db::DbPool;

use super::{ensure_book, ensure_status, find_reader};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::ListAssignmentsParams;
use crate::response::{CreatedId, DataResponse, PageResponse};
use crate::state::AppState;

/// Load the fields an order contributes to a newly linked assignment.
async fn order_seed(pool: &DbPool, order_id: DbId) -> AppResult<OrderSeed> {
    let order = OrderRepo::find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Order",
                id: order_id,
            })
        })?;

    Ok(OrderSeed {
        catalogue_id: order.catalogue_id,
        reception_date: order.request_received_date.date_naive(),
    })
}

fn assignment_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Assignment",
        id,
    })
}

/// GET /assignments?page=&page_size=&search=&status_id=
///
/// Newest-created first, with the current reader of each row resolved.
pub async fn list_assignments(
    _auth: RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<ListAssignmentsParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageRequest::new(params.page, params.page_size, state.config.default_page_size);
    let filter = AssignmentFilter {
        search: params.search,
        status_id: params.status_id,
    };

    let result = AssignmentRepo::list(&state.pool, &filter, page).await?;

    Ok(Json(PageResponse::new(result.items, result.total, page)))
}

/// POST /assignments
///
/// Create an assignment, optionally seeded from an order and optionally
/// with an initial reader. Responds with `{ "data": { "id": ... } }`.
pub async fn create_assignment(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
    body: Result<Json<CreateAssignment>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    validate_notes(input.notes.as_deref())?;

    let seed = match input.order_id {
        Some(order_id) => Some(order_seed(&state.pool, order_id).await?),
        None => None,
    };
    let seeded = seed_from_order(input.catalogue_id, input.reception_date, seed);
    let (catalogue_id, status_id) = validate_required(seeded.catalogue_id, input.status_id)?;

    ensure_book(&state.pool, catalogue_id).await?;
    ensure_status(&state.pool, status_id).await?;

    let initial_reader = match input.reader_id {
        Some(reader_id) => {
            find_reader(&state.pool, reader_id).await?;
            Some(InitialReader {
                reader_id,
                notes: INITIAL_ASSIGNMENT_NOTE.to_string(),
            })
        }
        None => None,
    };

    let new_assignment = NewAssignment {
        catalogue_id,
        order_id: input.order_id,
        status_id,
        reception_date: seeded.reception_date,
        sent_to_reader_date: input.sent_to_reader_date,
        returned_to_eca_date: input.returned_to_eca_date,
        notes: input.notes,
    };

    let assignment =
        AssignmentRepo::create(&state.pool, &new_assignment, initial_reader.as_ref()).await?;

    tracing::info!(
        user_id = auth.user_id,
        assignment_id = assignment.id,
        catalogue_id = assignment.catalogue_id,
        order_id = ?assignment.order_id,
        reader_id = ?input.reader_id,
        "Assignment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id: assignment.id },
        }),
    ))
}

/// GET /assignments/{id}
///
/// The assignment with its book, status, current reader and full history.
pub async fn get_assignment(
    _auth: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignment = AssignmentRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| assignment_not_found(id))?;
    let reader_history = ReaderHistoryRepo::list_for_assignment(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: AssignmentDetail {
            assignment,
            reader_history,
        },
    }))
}

/// PUT /assignments/{id}
///
/// Update the assignment's own fields. Nullable fields sent as `null` are
/// cleared. Linking a different order copies that order's book and
/// reception date unless they are sent explicitly.
pub async fn update_assignment(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<UpdateAssignment>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let existing = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| assignment_not_found(id))?;

    validate_notes(input.notes.as_ref().and_then(Option::as_deref))?;

    // Fields sent in the same request, including an explicit null
    // reception date, take precedence over the order's values.
    let mut changes = input;
    if let Some(Some(order_id)) = changes.order_id {
        if existing.order_id != Some(order_id) {
            let seed = order_seed(&state.pool, order_id).await?;
            if changes.catalogue_id.is_none() {
                changes.catalogue_id = Some(seed.catalogue_id);
            }
            if changes.reception_date.is_none() {
                changes.reception_date = Some(Some(seed.reception_date));
            }
        }
    }
    if let Some(catalogue_id) = changes.catalogue_id {
        ensure_book(&state.pool, catalogue_id).await?;
    }
    if let Some(status_id) = changes.status_id {
        ensure_status(&state.pool, status_id).await?;
    }

    let assignment = AssignmentRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| assignment_not_found(id))?;

    tracing::info!(
        user_id = auth.user_id,
        assignment_id = id,
        status_id = assignment.status_id,
        "Assignment updated"
    );

    Ok(Json(DataResponse { data: assignment }))
}

/// DELETE /assignments/{id}
///
/// Irreversible; the reader history goes with it.
pub async fn delete_assignment(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AssignmentRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(assignment_not_found(id));
    }

    tracing::info!(
        user_id = auth.user_id,
        assignment_id = id,
        "Assignment deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

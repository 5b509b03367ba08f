//! Handlers for orders.
//!
//! Orders seed assignments. The duplication and physical-loan flags are
//! mutually exclusive and choosing one picks its default status unless the
//! caller names a status explicitly. `is_overdue` is derived on every read.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use mediatheque_core::error::CoreError;
use mediatheque_core::order::{resolve_request_type, RequestType};
use mediatheque_core::search::{clamp_limit, normalize_term, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use mediatheque_core::status::{StatusId, STATUS_NAME_RECEIVED};
use mediatheque_core::types::DbId;
use mediatheque_db::models::order::{CreateOrder, OrderSummary, UpdateOrder};
use mediatheque_db::repositories::{OrderRepo, StatusRepo};
use mediatheque_db::DbPool;

use super::{ensure_book, ensure_status};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn order_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Order", id })
}

/// Resolve a seeded status name to its id.
async fn status_id_by_name(pool: &DbPool, name: &str) -> AppResult<StatusId> {
    let status = StatusRepo::find_by_name(pool, name).await?.ok_or_else(|| {
        AppError::Core(CoreError::Internal(format!(
            "Default status '{name}' is missing from the statuses table"
        )))
    })?;
    Ok(status.id)
}

async fn load_summary(pool: &DbPool, id: DbId) -> AppResult<OrderSummary> {
    let row = OrderRepo::find_summary(pool, id)
        .await?
        .ok_or_else(|| order_not_found(id))?;
    Ok(OrderSummary::from_row(row, Utc::now()))
}

/// GET /orders?q=&limit=
///
/// Most recently received orders, optionally filtered by a search term.
pub async fn list_orders(
    _auth: RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
    let rows = OrderRepo::search(&state.pool, normalize_term(params.q.as_deref()), limit).await?;

    let now = Utc::now();
    let orders: Vec<OrderSummary> = rows
        .into_iter()
        .map(|row| OrderSummary::from_row(row, now))
        .collect();

    Ok(Json(DataResponse { data: orders }))
}

/// GET /orders/{id}
pub async fn get_order(
    _auth: RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = load_summary(&state.pool, id).await?;
    Ok(Json(DataResponse { data: order }))
}

/// POST /orders
pub async fn create_order(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
    body: Result<Json<CreateOrder>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    ensure_book(&state.pool, input.catalogue_id).await?;

    let change = resolve_request_type(
        input.is_duplication,
        input.lent_physical_book,
        RequestType::default(),
    )?;

    let status_id = match (input.status_id, change.default_status_name) {
        (Some(status_id), _) => {
            ensure_status(&state.pool, status_id).await?;
            status_id
        }
        (None, Some(name)) => status_id_by_name(&state.pool, name).await?,
        (None, None) => status_id_by_name(&state.pool, STATUS_NAME_RECEIVED).await?,
    };

    let order = OrderRepo::create(&state.pool, &input, change.flags, status_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        order_id = order.id,
        catalogue_id = order.catalogue_id,
        is_duplication = order.is_duplication,
        lent_physical_book = order.lent_physical_book,
        "Order created"
    );

    let summary = load_summary(&state.pool, order.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: summary })))
}

/// PUT /orders/{id}
///
/// Changes here never propagate to assignments already seeded from the order.
pub async fn update_order(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<UpdateOrder>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let existing = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| order_not_found(id))?;

    let change = resolve_request_type(
        input.is_duplication,
        input.lent_physical_book,
        existing.request_type(),
    )?;

    if let Some(catalogue_id) = input.catalogue_id {
        ensure_book(&state.pool, catalogue_id).await?;
    }

    let status_id = match (input.status_id, change.default_status_name) {
        (Some(status_id), _) => {
            ensure_status(&state.pool, status_id).await?;
            Some(status_id)
        }
        (None, Some(name)) => Some(status_id_by_name(&state.pool, name).await?),
        (None, None) => None,
    };

    let order = OrderRepo::update(&state.pool, id, &input, change.flags, status_id)
        .await?
        .ok_or_else(|| order_not_found(id))?;

    tracing::info!(
        user_id = auth.user_id,
        order_id = id,
        status_id = order.status_id,
        "Order updated"
    );

    let summary = load_summary(&state.pool, order.id).await?;
    Ok(Json(DataResponse { data: summary }))
}

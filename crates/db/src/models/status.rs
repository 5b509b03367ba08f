//! Workflow status lookup rows.

use mediatheque_core::status::StatusId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `statuses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    pub sort_order: i32,
}

/// Status reference embedded in assignment and order views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub id: StatusId,
    pub name: String,
}

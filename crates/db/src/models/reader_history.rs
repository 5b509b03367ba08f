//! Reader assignment history (append-only).

use mediatheque_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reader_assignment_history` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReaderAssignmentHistory {
    pub id: DbId,
    pub assignment_id: DbId,
    pub reader_id: DbId,
    pub assigned_date: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A history entry annotated with who the reader is.
///
/// Lists are ordered newest first; index 0 is the current reader.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReaderHistoryEntry {
    pub id: DbId,
    pub assignment_id: DbId,
    pub reader_id: DbId,
    pub reader_name: String,
    pub reader_email: String,
    pub assigned_date: Timestamp,
    pub notes: Option<String>,
}

/// DTO for `POST /assignments/{id}/readers`.
#[derive(Debug, Deserialize)]
pub struct ReassignReader {
    pub reader_id: Option<DbId>,
    pub notes: Option<String>,
}

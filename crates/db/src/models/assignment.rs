//! Assignment model and views.

use mediatheque_core::status::StatusId;
use mediatheque_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::book::BookSummary;
use crate::models::patch;
use crate::models::reader_history::ReaderHistoryEntry;
use crate::models::status::StatusSummary;

/// A row from the `assignments` table. The reader lives in the history log.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Assignment {
    pub id: DbId,
    pub catalogue_id: DbId,
    pub order_id: Option<DbId>,
    pub status_id: StatusId,
    pub reception_date: Option<Date>,
    pub sent_to_reader_date: Option<Date>,
    pub returned_to_eca_date: Option<Date>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /assignments`.
///
/// `catalogue_id` and `status_id` are optional here so that a missing value
/// produces a validation error (and so `catalogue_id` can be seeded from the
/// linked order).
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub catalogue_id: Option<DbId>,
    pub order_id: Option<DbId>,
    pub reader_id: Option<DbId>,
    pub status_id: Option<StatusId>,
    pub reception_date: Option<Date>,
    pub sent_to_reader_date: Option<Date>,
    pub returned_to_eca_date: Option<Date>,
    pub notes: Option<String>,
}

/// Validated insert for the `assignments` table.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub catalogue_id: DbId,
    pub order_id: Option<DbId>,
    pub status_id: StatusId,
    pub reception_date: Option<Date>,
    pub sent_to_reader_date: Option<Date>,
    pub returned_to_eca_date: Option<Date>,
    pub notes: Option<String>,
}

/// Reader recorded in the history log when the assignment is created.
#[derive(Debug, Clone)]
pub struct InitialReader {
    pub reader_id: DbId,
    pub notes: String,
}

/// Body of `PUT /assignments/{id}`.
///
/// There is deliberately no reader field: reader changes go through the
/// reassignment endpoint. Unknown fields are rejected so a `reader_id` sent
/// here is not silently dropped.
///
/// Book and status are required columns, so `null` leaves them unchanged.
/// The other fields distinguish absent (keep), `null` (clear) and a value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAssignment {
    pub catalogue_id: Option<DbId>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub order_id: Option<Option<DbId>>,
    pub status_id: Option<StatusId>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub reception_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub sent_to_reader_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub returned_to_eca_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub notes: Option<Option<String>>,
}

/// Filters for the assignment listing.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFilter {
    pub search: Option<String>,
    pub status_id: Option<StatusId>,
}

/// Current reader as resolved from the most recent history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentReader {
    pub reader_id: DbId,
    pub name: String,
    pub email: String,
    pub assigned_date: Timestamp,
}

/// Flat row produced by the assignment view query.
#[derive(Debug, FromRow)]
pub struct AssignmentViewRow {
    pub id: DbId,
    pub catalogue_id: DbId,
    pub book_title: String,
    pub book_author: Option<String>,
    pub order_id: Option<DbId>,
    pub status_id: StatusId,
    pub status_name: String,
    pub reception_date: Option<Date>,
    pub sent_to_reader_date: Option<Date>,
    pub returned_to_eca_date: Option<Date>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub current_reader_id: Option<DbId>,
    pub current_reader_name: Option<String>,
    pub current_reader_email: Option<String>,
    pub current_reader_assigned_date: Option<Timestamp>,
}

/// Assignment joined with its book, status and current reader.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    pub id: DbId,
    pub catalogue_id: DbId,
    pub book: BookSummary,
    pub order_id: Option<DbId>,
    pub status_id: StatusId,
    pub status: StatusSummary,
    pub reception_date: Option<Date>,
    pub sent_to_reader_date: Option<Date>,
    pub returned_to_eca_date: Option<Date>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub current_reader: Option<CurrentReader>,
}

impl From<AssignmentViewRow> for AssignmentView {
    fn from(row: AssignmentViewRow) -> Self {
        let current_reader = match (
            row.current_reader_id,
            row.current_reader_name,
            row.current_reader_email,
            row.current_reader_assigned_date,
        ) {
            (Some(reader_id), Some(name), Some(email), Some(assigned_date)) => {
                Some(CurrentReader {
                    reader_id,
                    name,
                    email,
                    assigned_date,
                })
            }
            _ => None,
        };

        Self {
            id: row.id,
            catalogue_id: row.catalogue_id,
            book: BookSummary {
                id: row.catalogue_id,
                title: row.book_title,
                author: row.book_author,
            },
            order_id: row.order_id,
            status_id: row.status_id,
            status: StatusSummary {
                id: row.status_id,
                name: row.status_name,
            },
            reception_date: row.reception_date,
            sent_to_reader_date: row.sent_to_reader_date,
            returned_to_eca_date: row.returned_to_eca_date,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
            current_reader,
        }
    }
}

/// `GET /assignments/{id}` payload: the view plus the full reader history.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentDetail {
    #[serde(flatten)]
    pub assignment: AssignmentView,
    /// Newest first; index 0 matches `current_reader`.
    pub reader_history: Vec<ReaderHistoryEntry>,
}

/// A page of assignment views plus the total number of matches.
#[derive(Debug, Clone)]
pub struct AssignmentPage {
    pub items: Vec<AssignmentView>,
    pub total: i64,
}

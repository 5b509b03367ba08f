//! Order model (loan and duplication requests).

use mediatheque_core::order::{is_overdue, RequestType};
use mediatheque_core::status::StatusId;
use mediatheque_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::book::BookSummary;
use crate::models::status::StatusSummary;

/// A row from the `orders` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: DbId,
    pub catalogue_id: DbId,
    pub requester_id: Option<DbId>,
    pub status_id: StatusId,
    pub request_received_date: Timestamp,
    pub is_duplication: bool,
    pub lent_physical_book: bool,
    pub billing_status: Option<String>,
    pub delivery_method: Option<String>,
    pub cost_cents: Option<i64>,
    pub processed_by_staff_id: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    pub fn request_type(&self) -> RequestType {
        RequestType {
            is_duplication: self.is_duplication,
            lent_physical_book: self.lent_physical_book,
        }
    }
}

/// DTO for creating an order.
#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub catalogue_id: DbId,
    pub requester_id: Option<DbId>,
    pub status_id: Option<StatusId>,
    pub request_received_date: Option<Timestamp>,
    pub is_duplication: Option<bool>,
    pub lent_physical_book: Option<bool>,
    pub billing_status: Option<String>,
    pub delivery_method: Option<String>,
    pub cost_cents: Option<i64>,
    pub processed_by_staff_id: Option<DbId>,
    pub notes: Option<String>,
}

/// DTO for updating an order. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrder {
    pub catalogue_id: Option<DbId>,
    pub requester_id: Option<DbId>,
    pub status_id: Option<StatusId>,
    pub request_received_date: Option<Timestamp>,
    pub is_duplication: Option<bool>,
    pub lent_physical_book: Option<bool>,
    pub billing_status: Option<String>,
    pub delivery_method: Option<String>,
    pub cost_cents: Option<i64>,
    pub processed_by_staff_id: Option<DbId>,
    pub notes: Option<String>,
}

/// Requesting user embedded in order summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequesterSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// Flat row produced by the order summary query.
#[derive(Debug, FromRow)]
pub struct OrderSummaryRow {
    pub id: DbId,
    pub catalogue_id: DbId,
    pub book_title: String,
    pub book_author: Option<String>,
    pub requester_id: Option<DbId>,
    pub requester_name: Option<String>,
    pub requester_email: Option<String>,
    pub status_id: StatusId,
    pub status_name: String,
    pub request_received_date: Timestamp,
    pub is_duplication: bool,
    pub lent_physical_book: bool,
    pub billing_status: Option<String>,
    pub delivery_method: Option<String>,
    pub cost_cents: Option<i64>,
    pub processed_by_staff_id: Option<DbId>,
}

/// Order with nested book, requester and status, plus the derived
/// `is_overdue` flag.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub id: DbId,
    pub catalogue_id: DbId,
    pub catalogue: BookSummary,
    pub requester: Option<RequesterSummary>,
    pub status_id: StatusId,
    pub status: StatusSummary,
    pub request_received_date: Timestamp,
    pub is_duplication: bool,
    pub lent_physical_book: bool,
    pub billing_status: Option<String>,
    pub delivery_method: Option<String>,
    pub cost_cents: Option<i64>,
    pub processed_by_staff_id: Option<DbId>,
    pub is_overdue: bool,
}

impl OrderSummary {
    /// Build the summary, computing `is_overdue` relative to `now`.
    pub fn from_row(row: OrderSummaryRow, now: Timestamp) -> Self {
        let requester = match (row.requester_id, row.requester_name, row.requester_email) {
            (Some(id), Some(name), Some(email)) => Some(RequesterSummary { id, name, email }),
            _ => None,
        };
        let is_overdue = is_overdue(row.status_id, row.request_received_date, now);

        Self {
            id: row.id,
            catalogue_id: row.catalogue_id,
            catalogue: BookSummary {
                id: row.catalogue_id,
                title: row.book_title,
                author: row.book_author,
            },
            requester,
            status_id: row.status_id,
            status: StatusSummary {
                id: row.status_id,
                name: row.status_name,
            },
            request_received_date: row.request_received_date,
            is_duplication: row.is_duplication,
            lent_physical_book: row.lent_physical_book,
            billing_status: row.billing_status,
            delivery_method: row.delivery_method,
            cost_cents: row.cost_cents,
            processed_by_staff_id: row.processed_by_staff_id,
            is_overdue,
        }
    }
}

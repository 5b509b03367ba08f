//! Repository for the `orders` table.

use mediatheque_core::order::RequestType;
use mediatheque_core::search::like_pattern;
use mediatheque_core::status::StatusId;
use mediatheque_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, OrderSummaryRow, UpdateOrder};

const COLUMNS: &str = "id, catalogue_id, requester_id, status_id, request_received_date, \
    is_duplication, lent_physical_book, billing_status, delivery_method, cost_cents, \
    processed_by_staff_id, notes, created_at, updated_at";

/// Select list and joins for [`OrderSummaryRow`].
const SUMMARY_SELECT: &str = "SELECT o.id, o.catalogue_id, b.title AS book_title, \
    b.author AS book_author, o.requester_id, u.name AS requester_name, \
    u.email AS requester_email, o.status_id, s.name AS status_name, o.request_received_date, \
    o.is_duplication, o.lent_physical_book, o.billing_status, o.delivery_method, \
    o.cost_cents, o.processed_by_staff_id
    FROM orders o
    JOIN books b ON b.id = o.catalogue_id
    JOIN statuses s ON s.id = o.status_id
    LEFT JOIN users u ON u.id = o.requester_id";

/// Provides CRUD and lookup operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert an order with already-resolved request-type flags and status.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrder,
        request_type: RequestType,
        status_id: StatusId,
    ) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders
                (catalogue_id, requester_id, status_id, request_received_date,
                 is_duplication, lent_physical_book, billing_status, delivery_method,
                 cost_cents, processed_by_staff_id, notes)
             VALUES ($1, $2, $3, COALESCE($4, NOW()), $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(input.catalogue_id)
            .bind(input.requester_id)
            .bind(status_id)
            .bind(input.request_received_date)
            .bind(request_type.is_duplication)
            .bind(request_type.lent_physical_book)
            .bind(&input.billing_status)
            .bind(&input.delivery_method)
            .bind(input.cost_cents)
            .bind(input.processed_by_staff_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an order row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an order joined with its book, requester and status.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OrderSummaryRow>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE o.id = $1");
        sqlx::query_as::<_, OrderSummaryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Most recently received orders first. With a term, matches the book
    /// title/author or the requester's name/email case-insensitively, or
    /// the order id when the term is numeric.
    pub async fn search(
        pool: &PgPool,
        term: Option<&str>,
        limit: i64,
    ) -> Result<Vec<OrderSummaryRow>, sqlx::Error> {
        match term {
            Some(term) => {
                let query = format!(
                    "{SUMMARY_SELECT}
                     WHERE b.title ILIKE $1 ESCAPE '\\'
                        OR b.author ILIKE $1 ESCAPE '\\'
                        OR u.name ILIKE $1 ESCAPE '\\'
                        OR u.email ILIKE $1 ESCAPE '\\'
                        OR o.id = $2
                     ORDER BY o.request_received_date DESC, o.id DESC
                     LIMIT $3"
                );
                sqlx::query_as::<_, OrderSummaryRow>(&query)
                    .bind(like_pattern(term))
                    .bind(term.parse::<DbId>().ok())
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "{SUMMARY_SELECT}
                     ORDER BY o.request_received_date DESC, o.id DESC
                     LIMIT $1"
                );
                sqlx::query_as::<_, OrderSummaryRow>(&query)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update an order. `None` fields are left unchanged; the request-type
    /// flags are always written since they are resolved together.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrder,
        request_type: RequestType,
        status_id: Option<StatusId>,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET
                catalogue_id = COALESCE($2, catalogue_id),
                requester_id = COALESCE($3, requester_id),
                status_id = COALESCE($4, status_id),
                request_received_date = COALESCE($5, request_received_date),
                is_duplication = $6,
                lent_physical_book = $7,
                billing_status = COALESCE($8, billing_status),
                delivery_method = COALESCE($9, delivery_method),
                cost_cents = COALESCE($10, cost_cents),
                processed_by_staff_id = COALESCE($11, processed_by_staff_id),
                notes = COALESCE($12, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(input.catalogue_id)
            .bind(input.requester_id)
            .bind(status_id)
            .bind(input.request_received_date)
            .bind(request_type.is_duplication)
            .bind(request_type.lent_physical_book)
            .bind(&input.billing_status)
            .bind(&input.delivery_method)
            .bind(input.cost_cents)
            .bind(input.processed_by_staff_id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }
}

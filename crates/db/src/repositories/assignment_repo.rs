//! Repository for the `assignments` table.

use mediatheque_core::pagination::PageRequest;
use mediatheque_core::search::{like_pattern, normalize_term};
use mediatheque_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::{
    Assignment, AssignmentFilter, AssignmentPage, AssignmentView, AssignmentViewRow,
    InitialReader, NewAssignment, UpdateAssignment,
};
use crate::models::patch::bind_pair;
use crate::repositories::ReaderHistoryRepo;

/// Column list for plain `assignments` rows.
const COLUMNS: &str = "id, catalogue_id, order_id, status_id, reception_date, \
    sent_to_reader_date, returned_to_eca_date, notes, created_at, updated_at";

/// Select list for [`AssignmentViewRow`].
const VIEW_COLUMNS: &str = "a.id, a.catalogue_id, b.title AS book_title, b.author AS book_author, \
    a.order_id, a.status_id, s.name AS status_name, a.reception_date, a.sent_to_reader_date, \
    a.returned_to_eca_date, a.notes, a.created_at, a.updated_at, \
    cr.reader_id AS current_reader_id, cr.name AS current_reader_name, \
    cr.email AS current_reader_email, cr.assigned_date AS current_reader_assigned_date";

/// Joins shared by the list, count and detail queries. The lateral subquery
/// picks the newest history entry, which is the current reader.
const VIEW_FROM: &str = "FROM assignments a
    JOIN books b ON b.id = a.catalogue_id
    JOIN statuses s ON s.id = a.status_id
    LEFT JOIN LATERAL (
        SELECT h.reader_id, u.name, u.email, h.assigned_date
        FROM reader_assignment_history h
        JOIN users u ON u.id = h.reader_id
        WHERE h.assignment_id = a.id
        ORDER BY h.assigned_date DESC, h.id DESC
        LIMIT 1
    ) cr ON TRUE";

/// Listing filter. `$1` is the search pattern, `$2` the status.
const LIST_WHERE: &str = "WHERE ($1::TEXT IS NULL
        OR cr.name ILIKE $1 ESCAPE '\\'
        OR cr.email ILIKE $1 ESCAPE '\\'
        OR b.title ILIKE $1 ESCAPE '\\'
        OR b.author ILIKE $1 ESCAPE '\\')
      AND ($2::SMALLINT IS NULL OR a.status_id = $2)";

/// Provides CRUD and listing operations for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert an assignment and, when a reader is given, its first history
    /// entry. Both writes share one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &NewAssignment,
        initial_reader: Option<&InitialReader>,
    ) -> Result<Assignment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO assignments
                (catalogue_id, order_id, status_id, reception_date,
                 sent_to_reader_date, returned_to_eca_date, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let assignment = sqlx::query_as::<_, Assignment>(&query)
            .bind(input.catalogue_id)
            .bind(input.order_id)
            .bind(input.status_id)
            .bind(input.reception_date)
            .bind(input.sent_to_reader_date)
            .bind(input.returned_to_eca_date)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(reader) = initial_reader {
            ReaderHistoryRepo::append(&mut *tx, assignment.id, reader.reader_id, &reader.notes)
                .await?;
        }

        tx.commit().await?;
        Ok(assignment)
    }

    /// Find an assignment row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an assignment joined with its book, status and current reader.
    pub async fn find_view(pool: &PgPool, id: DbId) -> Result<Option<AssignmentView>, sqlx::Error> {
        let query = format!("SELECT {VIEW_COLUMNS} {VIEW_FROM} WHERE a.id = $1");
        let row = sqlx::query_as::<_, AssignmentViewRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(AssignmentView::from))
    }

    /// One page of assignments, newest-created first.
    ///
    /// The search term matches the current reader's name or email, or the
    /// book's title or author, case-insensitively.
    pub async fn list(
        pool: &PgPool,
        filter: &AssignmentFilter,
        page: PageRequest,
    ) -> Result<AssignmentPage, sqlx::Error> {
        let pattern = normalize_term(filter.search.as_deref()).map(like_pattern);

        let count_query = format!("SELECT COUNT(*) {VIEW_FROM} {LIST_WHERE}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(&pattern)
            .bind(filter.status_id)
            .fetch_one(pool)
            .await?;

        let list_query = format!(
            "SELECT {VIEW_COLUMNS} {VIEW_FROM} {LIST_WHERE}
             ORDER BY a.id DESC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, AssignmentViewRow>(&list_query)
            .bind(&pattern)
            .bind(filter.status_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok(AssignmentPage {
            items: rows.into_iter().map(AssignmentView::from).collect(),
            total,
        })
    }

    /// Update an assignment's own fields.
    ///
    /// Book and status use `COALESCE`. The nullable fields are written only
    /// when present in the patch, which may set them to `NULL`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssignment,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let (order_id_set, order_id) = bind_pair(&input.order_id);
        let (reception_set, reception_date) = bind_pair(&input.reception_date);
        let (sent_set, sent_to_reader_date) = bind_pair(&input.sent_to_reader_date);
        let (returned_set, returned_to_eca_date) = bind_pair(&input.returned_to_eca_date);
        let (notes_set, notes) = bind_pair(&input.notes);

        let query = format!(
            "UPDATE assignments SET
                catalogue_id = COALESCE($2, catalogue_id),
                status_id = COALESCE($3, status_id),
                order_id = CASE WHEN $4 THEN $5 ELSE order_id END,
                reception_date = CASE WHEN $6 THEN $7 ELSE reception_date END,
                sent_to_reader_date = CASE WHEN $8 THEN $9 ELSE sent_to_reader_date END,
                returned_to_eca_date = CASE WHEN $10 THEN $11 ELSE returned_to_eca_date END,
                notes = CASE WHEN $12 THEN $13 ELSE notes END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .bind(input.catalogue_id)
            .bind(input.status_id)
            .bind(order_id_set)
            .bind(order_id)
            .bind(reception_set)
            .bind(reception_date)
            .bind(sent_set)
            .bind(sent_to_reader_date)
            .bind(returned_set)
            .bind(returned_to_eca_date)
            .bind(notes_set)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an assignment. Its history rows go with it (cascade).
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

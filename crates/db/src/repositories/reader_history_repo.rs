//! Repository for the append-only `reader_assignment_history` table.
//!
//! Rows are only ever inserted. They disappear solely through the
//! `ON DELETE CASCADE` of their parent assignment.

use mediatheque_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::reader_history::{ReaderAssignmentHistory, ReaderHistoryEntry};

const COLUMNS: &str = "id, assignment_id, reader_id, assigned_date, notes, created_at";

/// Select list for entries joined with the reader's identity.
const ENTRY_SELECT: &str = "SELECT h.id, h.assignment_id, h.reader_id, \
    u.name AS reader_name, u.email AS reader_email, h.assigned_date, h.notes \
    FROM reader_assignment_history h \
    JOIN users u ON u.id = h.reader_id";

/// Provides append and query operations for reader history.
pub struct ReaderHistoryRepo;

impl ReaderHistoryRepo {
    /// Append a history entry stamped with the current time.
    ///
    /// Accepts any executor so it can run inside the assignment-creation
    /// transaction.
    pub async fn append<'e, E>(
        executor: E,
        assignment_id: DbId,
        reader_id: DbId,
        notes: &str,
    ) -> Result<ReaderAssignmentHistory, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO reader_assignment_history (assignment_id, reader_id, notes)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReaderAssignmentHistory>(&query)
            .bind(assignment_id)
            .bind(reader_id)
            .bind(notes)
            .fetch_one(executor)
            .await
    }

    /// All entries for an assignment, newest first.
    pub async fn list_for_assignment(
        pool: &PgPool,
        assignment_id: DbId,
    ) -> Result<Vec<ReaderHistoryEntry>, sqlx::Error> {
        let query = format!(
            "{ENTRY_SELECT}
             WHERE h.assignment_id = $1
             ORDER BY h.assigned_date DESC, h.id DESC"
        );
        sqlx::query_as::<_, ReaderHistoryEntry>(&query)
            .bind(assignment_id)
            .fetch_all(pool)
            .await
    }

    /// The most recent entry for an assignment, or `None` when no reader
    /// has ever been assigned.
    pub async fn current_reader(
        pool: &PgPool,
        assignment_id: DbId,
    ) -> Result<Option<ReaderHistoryEntry>, sqlx::Error> {
        let query = format!(
            "{ENTRY_SELECT}
             WHERE h.assignment_id = $1
             ORDER BY h.assigned_date DESC, h.id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, ReaderHistoryEntry>(&query)
            .bind(assignment_id)
            .fetch_optional(pool)
            .await
    }

    /// Number of entries for an assignment.
    pub async fn count_for_assignment(
        pool: &PgPool,
        assignment_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM reader_assignment_history WHERE assignment_id = $1",
        )
        .bind(assignment_id)
        .fetch_one(pool)
        .await
    }
}

//! Repository for the `statuses` lookup table.

use mediatheque_core::status::StatusId;
use sqlx::PgPool;

use crate::models::status::Status;

const COLUMNS: &str = "id, name, sort_order";

/// Read-only access to workflow statuses.
pub struct StatusRepo;

impl StatusRepo {
    /// List all statuses by `sort_order`, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, Status>(&query).fetch_all(pool).await
    }

    /// Find a status by ID.
    pub async fn find_by_id(pool: &PgPool, id: StatusId) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE id = $1");
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a status by its display name (exact match).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE name = $1");
        sqlx::query_as::<_, Status>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}

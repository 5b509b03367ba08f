//! Repository for the `users` table.

use mediatheque_core::roles::ROLE_READER;
use mediatheque_core::search::like_pattern;
use mediatheque_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, ReaderSummary, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, first_name, last_name, email, role_id, is_active, \
                        created_at, updated_at";

/// Provides user and reader lookups.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, first_name, last_name, email, role_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.role_id)
            .fetch_one(pool)
            .await
    }

    /// Find an active user holding the reader role.
    pub async fn find_reader(pool: &PgPool, id: DbId) -> Result<Option<ReaderSummary>, sqlx::Error> {
        sqlx::query_as::<_, ReaderSummary>(
            "SELECT u.id, u.name, u.email, u.first_name, u.last_name
             FROM users u
             JOIN roles r ON r.id = u.role_id
             WHERE u.id = $1 AND u.is_active AND r.name = $2",
        )
        .bind(id)
        .bind(ROLE_READER)
        .fetch_optional(pool)
        .await
    }

    /// Search active readers by name, first/last name or email.
    pub async fn search_readers(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<ReaderSummary>, sqlx::Error> {
        sqlx::query_as::<_, ReaderSummary>(
            "SELECT u.id, u.name, u.email, u.first_name, u.last_name
             FROM users u
             JOIN roles r ON r.id = u.role_id
             WHERE u.is_active AND r.name = $2
               AND (u.name ILIKE $1 ESCAPE '\\'
                    OR u.first_name ILIKE $1 ESCAPE '\\'
                    OR u.last_name ILIKE $1 ESCAPE '\\'
                    OR u.email ILIKE $1 ESCAPE '\\')
             ORDER BY u.name ASC, u.id ASC
             LIMIT $3",
        )
        .bind(like_pattern(term))
        .bind(ROLE_READER)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

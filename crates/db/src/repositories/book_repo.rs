//! Repository for the `books` table.

use mediatheque_core::search::like_pattern;
use mediatheque_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{Book, BookSummary, CreateBook};

const COLUMNS: &str = "id, title, author, created_at, updated_at";

/// Provides catalogue lookups.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .fetch_one(pool)
            .await
    }

    /// Find a book by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive search on title or author, ordered by title.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
    ) -> Result<Vec<BookSummary>, sqlx::Error> {
        sqlx::query_as::<_, BookSummary>(
            "SELECT id, title, author FROM books
             WHERE title ILIKE $1 ESCAPE '\\' OR author ILIKE $1 ESCAPE '\\'
             ORDER BY title ASC, id ASC
             LIMIT $2",
        )
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

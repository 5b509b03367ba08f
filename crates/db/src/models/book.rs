//! Catalogue book model.

use mediatheque_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `{id, title, author}` summary returned by lookups and embedded in views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct BookSummary {
    pub id: DbId,
    pub title: String,
    pub author: Option<String>,
}

/// DTO for creating a book.
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: Option<String>,
}

//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `mediatheque_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod assignment;
pub mod book;
pub mod order;
pub mod reader_history;
pub mod status;
pub mod user;

use mediatheque_core::error::CoreError;
use mediatheque_core::status::StatusId;
use mediatheque_core::types::DbId;
use mediatheque_db::models::user::ReaderSummary;
use mediatheque_db::repositories::{BookRepo, StatusRepo, UserRepo};
use mediatheque_db::DbPool;

use crate::error::{AppError, AppResult};

/// 404 unless the book exists.
pub(crate) async fn ensure_book(pool: &DbPool, id: DbId) -> AppResult<()> {
    BookRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(())
}

/// 404 unless the status exists.
pub(crate) async fn ensure_status(pool: &DbPool, id: StatusId) -> AppResult<()> {
    StatusRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Status",
                id: DbId::from(id),
            })
        })?;
    Ok(())
}

/// 404 unless the user exists, is active and holds the reader role.
pub(crate) async fn find_reader(pool: &DbPool, id: DbId) -> AppResult<ReaderSummary> {
    UserRepo::find_reader(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Reader",
                id,
            })
        })
}

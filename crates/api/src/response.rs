//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project conventions.

use mediatheque_core::pagination::PageRequest;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated envelope: `{ data, total, page, page_size, total_pages }`.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(data: Vec<T>, total: i64, page: PageRequest) -> Self {
        Self {
            data,
            total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages(total),
        }
    }
}

/// Body returned by create endpoints that only report the new identity.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: mediatheque_core::types::DbId,
}

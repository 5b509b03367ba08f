//! Shared query parameter types for API handlers.

use mediatheque_core::status::StatusId;
use serde::Deserialize;

/// Free-text lookup parameters (`?q=&limit=`).
///
/// Limits are clamped via `clamp_limit` before reaching the repository.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /assignments`.
#[derive(Debug, Deserialize)]
pub struct ListAssignmentsParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    pub status_id: Option<StatusId>,
}

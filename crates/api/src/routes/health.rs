//! Liveness probe mounted at the root, outside `/api/v1` and without auth.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// `GET /health` payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

/// Connection pool snapshot.
#[derive(Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    pub connections: u32,
    pub idle_connections: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachable = match mediatheque_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if reachable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            connections: state.pool.size(),
            idle_connections: state.pool.num_idle(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

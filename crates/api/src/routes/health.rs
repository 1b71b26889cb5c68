use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Connection counts for the record store pool.
#[derive(Serialize)]
pub struct PoolStats {
    pub open: u32,
    pub idle: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the record store does not answer.
    pub status: &'static str,
    pub db_healthy: bool,
    pub pool: PoolStats,
}

/// GET /health -- record store reachability and pool usage.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = cinema_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Record store did not answer the health probe");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        db_healthy,
        pool: PoolStats {
            open: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

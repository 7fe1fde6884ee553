//! System API endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

use super::{ApiResponse, AppState, HealthStatus};

/// Reports liveness and database reachability.
///
/// # Endpoint
/// `GET /api/system/health`
///
/// Responds 503 when the database cannot be reached.
pub async fn get_health(State(state): State<Arc<AppState>>) -> Response {
    let database = match state.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check database ping failed: {}", e);
            false
        }
    };

    let movies = if database {
        state.store().count_movies().await.unwrap_or_default()
    } else {
        0
    };

    let status = HealthStatus {
        status: if database { "ok" } else { "degraded" },
        database,
        movies,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(ApiResponse::success(status))).into_response()
}

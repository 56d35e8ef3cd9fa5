//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports "degraded" while no API key can be resolved; the server still
/// serves the page, but every analysis will fail until one is set.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let credential_configured = state.analyzer.is_configured();

    Json(HealthResponse {
        status: if credential_configured {
            "healthy"
        } else {
            "degraded"
        }
        .to_string(),
        credential_configured,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}

//! Analyze Routes
//!
//! - POST /api/v1/analyze - Analyze a night and return the analysis with its card

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::analysis::Reflection;
use crate::api::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::card::render;

/// POST /api/v1/analyze
///
/// Blank reflections are rejected before the completion endpoint is called.
pub async fn analyze_night(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let reflection =
        Reflection::new(&req.reflection).map_err(|e| ApiError::Validation(e.to_string()))?;

    let request_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        request_id = %request_id,
        with_metrics = req.sleep_data.is_some(),
        "Analyzing night"
    );

    let analysis = state
        .analyzer
        .analyze(&reflection, req.sleep_data.as_ref())
        .await?;
    let card = render(&analysis);

    Ok(Json(AnalyzeResponse {
        request_id,
        generated_at: Utc::now(),
        analysis,
        card,
    }))
}

//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON and forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{NightAnalysis, SleepMetrics};
use crate::card::NightCard;

// ============================================
// ANALYSIS DTOs
// ============================================

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The user's description of their night
    pub reflection: String,
    /// Optional sleep measurements
    #[serde(default)]
    pub sleep_data: Option<SleepMetrics>,
}

/// Analyze response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub request_id: String,
    pub generated_at: DateTime<Utc>,
    /// The analysis exactly as decoded
    pub analysis: NightAnalysis,
    /// The card laid out from the analysis
    pub card: NightCard,
}

// ============================================
// PAGE DTOs
// ============================================

/// Form posted by the page
#[derive(Debug, Default, Deserialize)]
pub struct ReflectionForm {
    #[serde(default)]
    pub reflection: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Whether an API key can currently be resolved
    pub credential_configured: bool,
    pub uptime_seconds: u64,
    pub version: String,
}

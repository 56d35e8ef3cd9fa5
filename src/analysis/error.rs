//! Analysis Errors
//!
//! Everything that can go wrong between a reflection and a validated
//! `NightAnalysis`, plus the message shown to the user for each kind.

use thiserror::Error;

/// Shown for failures the user can do nothing specific about
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze your night. Please try again.";

/// Errors that can occur while analyzing a night
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No credential could be resolved; no request was sent
    #[error("API key not found in {source_name}")]
    Configuration { source_name: String },

    /// The completion endpoint answered with a non-success status
    #[error("API request failed with status {status}{}", detail(.message))]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    /// Success status, but no completion text in the body
    #[error("No content received from API")]
    EmptyResponse,

    /// Completion text is not valid JSON
    #[error("Completion content is not valid JSON")]
    MalformedResponse,

    /// Completion JSON does not have the NightAnalysis shape
    #[error("Invalid response format from AI: `{field}` {reason}")]
    InvalidShape {
        field: &'static str,
        reason: &'static str,
    },

    /// DNS, connection or other network-level failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl AnalysisError {
    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Configuration { .. } => "configuration",
            AnalysisError::Upstream { .. } => "upstream",
            AnalysisError::EmptyResponse => "empty_response",
            AnalysisError::MalformedResponse => "malformed_response",
            AnalysisError::InvalidShape { .. } => "invalid_shape",
            AnalysisError::Transport(_) => "transport",
        }
    }

    /// Message suitable for the error region of the page
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Configuration { source_name } => format!(
                "API key not found. Set the {} environment variable or api_key in the [analysis] config section.",
                source_name
            ),
            AnalysisError::Upstream { status, message } => {
                let mut text = format!("API request failed: {}", status);
                if let Some(reason) = reqwest::StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                {
                    text.push(' ');
                    text.push_str(reason);
                }
                text.push('.');
                if let Some(message) = message.as_deref().filter(|m| !m.is_empty()) {
                    text.push(' ');
                    text.push_str(message);
                }
                text
            }
            AnalysisError::EmptyResponse => {
                "No content received from API. Please try again.".to_string()
            }
            AnalysisError::MalformedResponse
            | AnalysisError::InvalidShape { .. }
            | AnalysisError::Transport(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

//! Completion API Client
//!
//! HTTP client for the chat-completion endpoint that performs the analysis.
//! One request per call: no retries, no caching, no rate limiting.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::decode::decode_analysis;
use super::error::AnalysisError;
use super::prompt::{build_user_message, SYSTEM_PROMPT};
use super::types::{NightAnalysis, Reflection, SleepMetrics};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Anything that can turn a reflection into a `NightAnalysis`
#[async_trait]
pub trait NightAnalyzer: Send + Sync {
    /// Analyze one night
    async fn analyze(
        &self,
        reflection: &Reflection,
        metrics: Option<&SleepMetrics>,
    ) -> Result<NightAnalysis, AnalysisError>;

    /// Whether a credential is currently available
    fn is_configured(&self) -> bool {
        true
    }
}

/// Where the API key comes from.
///
/// Resolved on every request and never cached, so rotating the
/// environment variable takes effect on the next call.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Read from an environment variable
    Environment(String),
    /// A fixed key, e.g. from the config file
    Fixed(String),
}

impl CredentialSource {
    /// Current key, if any. Empty values count as missing.
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            CredentialSource::Environment(var) => std::env::var(var).ok()?,
            CredentialSource::Fixed(key) => key.clone(),
        };
        let key = key.trim().to_string();
        (!key.is_empty()).then_some(key)
    }

    /// Name of the source, for error messages
    pub fn name(&self) -> &str {
        match self {
            CredentialSource::Environment(var) => var,
            CredentialSource::Fixed(_) => "api_key",
        }
    }
}

impl Default for CredentialSource {
    fn default() -> Self {
        CredentialSource::Environment(DEFAULT_API_KEY_ENV.to_string())
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment(var) => f.debug_tuple("Environment").field(var).finish(),
            CredentialSource::Fixed(_) => f.debug_tuple("Fixed").field(&"<redacted>").finish(),
        }
    }
}

/// Configuration for the completion client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    pub credential: CredentialSource,
    /// Overall request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            credential: CredentialSource::default(),
            request_timeout: None,
        }
    }
}

/// Client for the chat-completion endpoint
pub struct AnalysisClient {
    client: Client,
    config: ClientConfig,
}

impl AnalysisClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Send the reflection to the completion endpoint and decode the result
    pub async fn analyze(
        &self,
        reflection: &Reflection,
        metrics: Option<&SleepMetrics>,
    ) -> Result<NightAnalysis, AnalysisError> {
        let api_key =
            self.config
                .credential
                .resolve()
                .ok_or_else(|| AnalysisError::Configuration {
                    source_name: self.config.credential.name().to_string(),
                })?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_user_message(reflection, metrics),
                },
            ],
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!(
            model = %self.config.model,
            with_metrics = metrics.is_some_and(|m| !m.is_empty()),
            "Requesting night analysis"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|detail| detail.message);

            tracing::warn!(status = status.as_u16(), "Completion endpoint returned an error");
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let content = serde_json::from_str::<ChatResponse>(&body)
            .ok()
            .and_then(ChatResponse::into_content)
            .ok_or(AnalysisError::EmptyResponse)?;

        let analysis = decode_analysis(&content).map_err(|e| {
            tracing::warn!(kind = e.kind(), error = %e, "Could not decode night analysis");
            e
        })?;

        tracing::info!(
            title = %analysis.title,
            colors = analysis.colors.len(),
            "Night analysis received"
        );

        Ok(analysis)
    }
}

#[async_trait]
impl NightAnalyzer for AnalysisClient {
    async fn analyze(
        &self,
        reflection: &Reflection,
        metrics: Option<&SleepMetrics>,
    ) -> Result<NightAnalysis, AnalysisError> {
        AnalysisClient::analyze(self, reflection, metrics).await
    }

    fn is_configured(&self) -> bool {
        self.config.credential.resolve().is_some()
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

impl ChatResponse {
    /// Content of the first choice, if it has any
    fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()?
            .message?
            .content
            .filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

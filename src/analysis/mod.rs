//! Night Analysis
//!
//! Sends a user's reflection on their night to a chat-completion endpoint
//! and turns the reply into a validated `NightAnalysis`.
//!
//! ## Flow
//!
//! 1. Resolve the API key (missing key fails before any request)
//! 2. Build the fixed system prompt and the user message
//! 3. POST once to `<base_url>/chat/completions` asking for a JSON object
//! 4. Decode the completion text and check the required fields

mod client;
mod decode;
mod error;
mod prompt;
mod types;

pub use client::{
    AnalysisClient, ClientConfig, CredentialSource, NightAnalyzer, DEFAULT_API_KEY_ENV,
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use decode::decode_analysis;
pub use error::{AnalysisError, GENERIC_FAILURE_MESSAGE};
pub use prompt::{build_user_message, SYSTEM_PROMPT};
pub use types::{NightAnalysis, Reflection, ReflectionError, SleepMetrics};

//! # Dream Palette
//!
//! Turns a free-text reflection on last night's sleep and dreams into a
//! short structured analysis and renders it as a colour card.
//!
//! ## Modules
//!
//! - [`analysis`]: Chat-completion client, prompt and response decoding
//! - [`card`]: Gradient background and card layout, plain text or HTML
//! - [`shell`]: Input/loading/error/result state and the full page
//! - [`api`]: Web page and JSON API with Axum
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dream_palette::analysis::{AnalysisClient, ClientConfig, Reflection, SleepMetrics};
//! use dream_palette::card::render;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalysisClient::new(ClientConfig::default())?;
//!
//!     let reflection = Reflection::new("Slept badly, dreamt of a flooded library")?;
//!     let metrics = SleepMetrics::new().total_sleep_hours(5.5).wake_count(3);
//!
//!     let analysis = client.analyze(&reflection, Some(&metrics)).await?;
//!     println!("{}", render(&analysis));
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod card;
pub mod config;
pub mod logging;
pub mod shell;

// Re-export top-level types for convenience
pub use analysis::{
    AnalysisClient, AnalysisError, ClientConfig, CredentialSource, NightAnalysis, NightAnalyzer,
    Reflection, ReflectionError, SleepMetrics,
};

pub use card::{card_html, render, Background, ColorStop, IntensityMeter, NightCard, TagGroup};

pub use shell::{render_page, ShellState};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{AnalysisConfig, ApiConfig, Config, ConfigError, LoggingConfig};

pub use logging::init_logging;

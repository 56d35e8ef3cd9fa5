//! Dream Palette API Server
//!
//! Run with: cargo run --bin dream-palette-api
//!
//! # Configuration
//!
//! Read from `--config`, or the first of
//! `<config_dir>/dream-palette/config.toml`, `/etc/dream-palette/config.toml`
//! and `./config.toml`. Environment variables override the file:
//! - `DREAM_PALETTE_BASE_URL`: Chat-completion base URL
//! - `DREAM_PALETTE_MODEL`: Model name
//! - `DREAM_PALETTE_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `DREAM_PALETTE_API_PORT`: Port to listen on (default: 8085)
//! - `DREAM_PALETTE_LOG_LEVEL` / `DREAM_PALETTE_LOG_FORMAT`: Logging
//! - `OPENAI_API_KEY`: API key (name set by `analysis.api_key_env`)
//! - `RUST_LOG`: Log filter, wins over the configured level

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use dream_palette::analysis::{AnalysisClient, NightAnalyzer};
use dream_palette::api::{serve, AppState};
use dream_palette::config::Config;
use dream_palette::logging::init_logging;

#[derive(Parser)]
#[command(name = "dream-palette-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dream Palette web page and JSON API")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::resolve(args.config.as_deref())?;

    init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Starting Dream Palette API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        base_url = %config.analysis.base_url,
        model = %config.analysis.model,
        "Analysis endpoint"
    );

    let client = AnalysisClient::new(config.analysis.client_config())
        .context("Failed to build analysis client")?;

    if !client.is_configured() {
        tracing::warn!(
            "No API key found in {} (analyses will fail until one is set)",
            config.analysis.credential().name()
        );
    }

    let state = AppState::new(Arc::new(client));

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Dream Palette API server stopped");
    Ok(())
}

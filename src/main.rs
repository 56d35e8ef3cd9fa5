//! Dream Palette CLI
//!
//! Command-line interface for Dream Palette:
//! - Analyze a night and print its card
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use dream_palette::analysis::{AnalysisClient, SleepMetrics};
use dream_palette::card::card_html;
use dream_palette::config::Config;
use dream_palette::logging::init_logging;
use dream_palette::shell::ShellState;

#[derive(Parser)]
#[command(name = "dream-palette")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn a reflection on your night into a colour card")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a night
    Analyze {
        /// Reflection text (default: read from stdin)
        text: Option<String>,
        /// Total hours slept
        #[arg(long)]
        sleep_hours: Option<f64>,
        /// Number of times woken up
        #[arg(long)]
        wake_count: Option<u32>,
        /// Average heart rate in bpm
        #[arg(long)]
        avg_heart_rate: Option<f64>,
        /// Output format (text, json, html)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            sleep_hours,
            wake_count,
            avg_heart_rate,
            format,
        } => {
            let config = Config::resolve(cli.config.as_deref())?;
            if let Err(e) = init_logging(&config.logging) {
                eprintln!("Logging disabled: {}", e);
            }

            let input = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read reflection from stdin")?;
                    buf
                }
            };

            let metrics = SleepMetrics {
                total_sleep_hours: sleep_hours,
                wake_count,
                avg_heart_rate,
                ..SleepMetrics::new()
            };
            let metrics = (!metrics.is_empty()).then_some(metrics);

            let client = AnalysisClient::new(config.analysis.client_config())
                .context("Failed to build analysis client")?;

            let mut shell = ShellState::with_input(input);
            shell.run(&client, metrics.as_ref()).await;

            if let Some(error) = &shell.error {
                eprintln!("{}", error);
                std::process::exit(1);
            }

            let (Some(analysis), Some(card)) = (shell.result.as_ref(), shell.card()) else {
                anyhow::bail!("Analysis finished without a result");
            };

            match format.as_str() {
                "json" => {
                    let output = serde_json::json!({
                        "analysis": analysis,
                        "card": card,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                "html" => print!("{}", card_html(&card)),
                _ => println!("{}", card),
            }
        }

        Commands::Config { output } => {
            let config = dream_palette::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

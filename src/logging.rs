//! Logging Setup
//!
//! Installs the global tracing subscriber. `RUST_LOG` wins over the
//! configured level. Output goes to stderr so the CLI can print cards on
//! stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Default filter directives for a configured level
pub fn default_directives(level: &str) -> String {
    format!("dream_palette={level},tower_http={level}")
}

/// Install the global subscriber
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let json = config.format.eq_ignore_ascii_case("json");

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let pretty_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives("debug"),
            "dream_palette=debug,tower_http=debug"
        );
    }
}

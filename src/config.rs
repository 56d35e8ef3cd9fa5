//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! The API key is never read here: the analysis client resolves it from
//! its credential source on every request.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::{
    ClientConfig, CredentialSource, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion endpoint configuration
#[derive(Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Fixed API key; takes precedence over `api_key_env` when set
    #[serde(default)]
    pub api_key: Option<String>,

    /// No timeout when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl AnalysisConfig {
    /// Where the client should look for the API key
    pub fn credential(&self) -> CredentialSource {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => CredentialSource::Fixed(key.clone()),
            _ => CredentialSource::Environment(self.api_key_env.clone()),
        }
    }

    /// Build the analysis client configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            credential: self.credential(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8085
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dream-palette").join("config.toml")),
            Some(PathBuf::from("/etc/dream-palette/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load an explicit file if given, otherwise search the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Analysis overrides
        if let Ok(base_url) = std::env::var("DREAM_PALETTE_BASE_URL") {
            self.analysis.base_url = base_url;
        }
        if let Ok(model) = std::env::var("DREAM_PALETTE_MODEL") {
            self.analysis.model = model;
        }

        // API overrides
        if let Ok(host) = std::env::var("DREAM_PALETTE_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("DREAM_PALETTE_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("DREAM_PALETTE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DREAM_PALETTE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Dream Palette Configuration
#
# Environment variables override these settings:
# - DREAM_PALETTE_BASE_URL
# - DREAM_PALETTE_MODEL
# - DREAM_PALETTE_API_HOST
# - DREAM_PALETTE_API_PORT
# - DREAM_PALETTE_LOG_LEVEL
# - DREAM_PALETTE_LOG_FORMAT

[analysis]
# Chat-completion API base URL
base_url = "https://api.openai.com/v1"

# Model used for every analysis
model = "gpt-4o-mini"

# Sampling temperature
temperature = 0.7

# Environment variable that holds the API key (read on every request)
api_key_env = "OPENAI_API_KEY"

# Request timeout in seconds (default: wait indefinitely)
# request_timeout_secs = 60

[api]
# Web server host
host = "0.0.0.0"

# Web server port
port = 8085

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.analysis.model, "gpt-4o-mini");
        assert_eq!(config.analysis.temperature, 0.7);
        assert_eq!(config.analysis.request_timeout_secs, None);
        assert_eq!(config.api.addr(), "0.0.0.0:8085");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [analysis]
            model = "gpt-4o"

            [api]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.analysis.model, "gpt-4o");
        assert_eq!(config.analysis.base_url, "https://api.openai.com/v1");
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.analysis.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.analysis.api_key, None);
        assert_eq!(config.api.port, 8085);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/dream-palette.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_credential_source_selection() {
        let mut analysis = AnalysisConfig::default();
        assert_eq!(
            analysis.credential(),
            CredentialSource::Environment("OPENAI_API_KEY".to_string())
        );

        analysis.api_key = Some("   ".to_string());
        assert_eq!(
            analysis.credential(),
            CredentialSource::Environment("OPENAI_API_KEY".to_string())
        );

        analysis.api_key = Some("sk-file".to_string());
        assert_eq!(
            analysis.credential(),
            CredentialSource::Fixed("sk-file".to_string())
        );
        assert!(!format!("{:?}", analysis).contains("sk-file"));
    }

    #[test]
    fn test_client_config_timeout() {
        let analysis = AnalysisConfig {
            request_timeout_secs: Some(45),
            ..Default::default()
        };
        let client = analysis.client_config();
        assert_eq!(client.request_timeout, Some(Duration::from_secs(45)));
        assert_eq!(client.model, "gpt-4o-mini");
    }
}

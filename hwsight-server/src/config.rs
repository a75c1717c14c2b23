//! Configuration for the telemetry server.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use hwsight_common::{LoggingConfig, load_config, parse_config};
use hwsight_core::NormalizeConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] hwsight_common::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Sensor source (Libre Hardware Monitor remote web server).
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Normalization settings.
    #[serde(default)]
    pub telemetry: NormalizeConfig,

    /// Log the hardware inventory and detection summary of every request.
    #[serde(default)]
    pub verbose: bool,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sensor source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the sensor tree (default: "http://127.0.0.1:8085/data.json").
    #[serde(default = "default_source_url")]
    pub url: String,

    /// Request timeout in milliseconds (default: 5000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_source_url() -> String {
    "http://127.0.0.1:8085/data.json".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON5 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: ServerConfig = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON5 string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = parse_config(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source_url()?;

        if self.source.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "timeout_ms must be > 0".to_string(),
            ));
        }

        self.listen_addr()?;

        Ok(())
    }

    /// Parsed source URL. Only http and https are accepted.
    pub fn source_url(&self) -> Result<reqwest::Url, ConfigError> {
        let url = reqwest::Url::parse(&self.source.url).map_err(|e| {
            ConfigError::Validation(format!("Invalid source url '{}': {}", self.source.url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::Validation(format!(
                "Unsupported source url scheme: {}",
                other
            ))),
        }
    }

    /// Parsed listen address.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.listen.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid listen address: {}", self.server.listen))
        })
    }
}

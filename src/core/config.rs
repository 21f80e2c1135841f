//! Configuration management for the escompat harness.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{EscompatError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

/// Connection configuration for the service under test
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionConfig {
    /// Hostname of the service
    #[serde(default = "default_host")]
    pub host: String,

    /// Port of the service
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

/// Scenario configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Index the scenario writes to and searches
    #[serde(default = "default_index")]
    pub index: String,

    /// Document type within the index
    #[serde(default = "default_doc_type")]
    pub doc_type: String,
}

// Default value functions
fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    9200
}

fn default_timeout() -> u64 {
    30
}

fn default_index() -> String {
    "twitter".to_string()
}

fn default_doc_type() -> String {
    "tweet".to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_sec: default_timeout(),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            index: default_index(),
            doc_type: default_doc_type(),
        }
    }
}

impl ConnectionConfig {
    /// Base URL of the service under test
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| EscompatError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File locations tried in order:
    /// 1. ESCOMPAT_CONFIG env var
    /// 2. ./escompat.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("ESCOMPAT_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("escompat.toml").exists() {
            Self::from_file("escompat.toml")?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(port) = env::var("ELASTIC_PORT") {
            if let Ok(p) = port.parse() {
                self.connection.port = p;
            }
        }
        if let Ok(host) = env::var("ESCOMPAT_HOST") {
            self.connection.host = host;
        }
        if let Ok(timeout) = env::var("ESCOMPAT_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.connection.timeout_sec = t;
            }
        }
        if let Ok(index) = env::var("ESCOMPAT_INDEX") {
            self.scenario.index = index;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.connection.host.is_empty() {
            return Err(EscompatError::ConfigError(
                "Host must be non-empty".to_string(),
            ));
        }

        if self.connection.port == 0 {
            return Err(EscompatError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.connection.timeout_sec == 0 {
            return Err(EscompatError::ConfigError(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.scenario.index.is_empty() {
            return Err(EscompatError::ConfigError(
                "Index name must be non-empty".to_string(),
            ));
        }

        if self.scenario.doc_type.is_empty() {
            return Err(EscompatError::ConfigError(
                "Document type must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Target: {}", self.connection.base_url());
        tracing::info!("  Request timeout: {}s", self.connection.timeout_sec);
        tracing::info!(
            "  Scenario index: {}/{}",
            self.scenario.index,
            self.scenario.doc_type
        );
    }
}

//! Service configuration.
//!
//! Loaded from a TOML file. `${VAR}` and `${VAR:-default}` references are replaced from the
//! environment before the file is parsed. Every section and field has a default, so a missing
//! file or a partial one is fine.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8082
//!
//! [delivery]
//! base_url = "${DELIVERY_URL:-http://localhost:8083}"
//! timeout_secs = 30
//!
//! [store]
//! buffer_size = 32
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Downstream delivery service settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_delivery_url")]
    pub base_url: String,
    #[serde(default = "default_delivery_timeout")]
    pub timeout_secs: u64,
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Capacity of each store's request channel.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_delivery_url() -> String {
    "http://localhost:8083".to_string()
}

fn default_delivery_timeout() -> u64 {
    30
}

fn default_buffer_size() -> usize {
    32
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            base_url: default_delivery_url(),
            timeout_secs: default_delivery_timeout(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DeliveryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Replaces `${VAR}` and `${VAR:-default}` with values from the environment.
///
/// A variable that is unset and has no default is an error.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
        .map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

    let mut missing = None;
    let resolved = re.replace_all(input, |caps: &regex::Captures| {
        let name = &caps[1];
        match (std::env::var(name), caps.get(2)) {
            (Ok(value), _) => value,
            (Err(_), Some(default)) => default.as_str().to_string(),
            (Err(_), None) => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(ConfigError::Validation(format!(
            "Environment variable '{}' not found",
            name
        ))),
        None => Ok(resolved.into_owned()),
    }
}

impl Config {
    /// Reads and validates the file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Like [`Config::from_file`], but a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        info!(path = %path.display(), "Loading config");
        Self::from_file(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".into()));
        }
        let url = &self.delivery.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "Delivery base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.store.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "Store buffer_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let resolved = resolve_env_vars(s)?;
        let config: Config = toml::from_str(&resolved)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8082");
        assert_eq!(config.delivery.base_url, "http://localhost:8083");
        assert_eq!(config.delivery.timeout(), Duration::from_secs(30));
        assert_eq!(config.store.buffer_size, 32);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_env_var_resolution() {
        std::env::set_var("ORDER_TEST_DELIVERY_HOST", "delivery.internal");
        let toml = r#"
            [delivery]
            base_url = "http://${ORDER_TEST_DELIVERY_HOST}:9090"
            timeout_secs = ${ORDER_TEST_UNSET_TIMEOUT:-5}
        "#;

        let config: Config = toml.parse().unwrap();
        assert_eq!(config.delivery.base_url, "http://delivery.internal:9090");
        assert_eq!(config.delivery.timeout_secs, 5);
    }

    #[test]
    fn test_missing_env_var_error() {
        let result = resolve_env_vars("port = ${ORDER_TEST_SURELY_UNSET}");
        assert!(matches!(
            result,
            Err(ConfigError::Validation(msg)) if msg.contains("ORDER_TEST_SURELY_UNSET")
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        for toml in [
            "[server]\nport = 0",
            "[delivery]\nbase_url = \"localhost:8083\"",
            "[store]\nbuffer_size = 0",
        ] {
            let result = toml.parse::<Config>();
            assert!(matches!(result, Err(ConfigError::Validation(_))), "{toml}");
        }
    }

    #[test]
    fn test_malformed_toml() {
        let result = "[server\nport = 1".parse::<Config>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

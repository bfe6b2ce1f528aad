//! Configuration management for mobscan
//!
//! [`ClientConfig`] tunes the HTTP transport. [`Config`] is the optional
//! profile file read by the command-line driver; the library itself never
//! reads files or the environment.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::models::ApiKey;
use crate::error::{ConfigError, Result};

/// Default GraphQL endpoint of the scanning service
pub const DEFAULT_ENDPOINT: &str = "https://api.ostorlab.co/apis/graphql";

/// Transport settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Time allowed to establish the connection
    pub connect_timeout_secs: u64,

    /// Time allowed for the whole request, upload included
    pub timeout_secs: u64,

    /// Largest response body that will be read
    pub max_response_bytes: usize,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 300,
            max_response_bytes: 16 * 1024 * 1024,
            user_agent: format!("mobscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Reject settings the transport can't work with
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 || self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be greater than zero".to_string()).into());
        }
        if self.max_response_bytes == 0 {
            return Err(
                ConfigError::Invalid("max_response_bytes must be greater than zero".to_string())
                    .into(),
            );
        }
        Ok(())
    }
}

/// Profile file (`~/.mobscan/config.yaml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// GraphQL endpoint
    #[serde(default)]
    pub endpoint: Option<String>,

    /// API key for the scanning service
    #[serde(default)]
    pub api_key: Option<ApiKey>,

    /// Transport settings
    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mobscan").join("config.yaml"))
    }

    /// Load from an explicit path, or from the default path if it exists.
    ///
    /// A missing default file yields an empty config; a missing explicit file
    /// is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(Path::new(path)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
        config.client.validate()?;
        Ok(config)
    }

    /// Endpoint to use, falling back to the service default
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Validate that an API key is present
    pub fn require_api_key(&self) -> Result<&ApiKey> {
        match &self.api_key {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.timeout_secs, 300);
        assert!(config.user_agent.starts_with("mobscan/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml(
            "endpoint: https://scan.example.com/graphql\n\
             api_key: secret-key\n\
             client:\n  timeout_secs: 60\n",
        )
        .unwrap();

        assert_eq!(config.endpoint(), "https://scan.example.com/graphql");
        assert_eq!(config.require_api_key().unwrap().expose(), "secret-key");
        assert_eq!(config.client.timeout_secs, 60);
        assert_eq!(config.client.connect_timeout_secs, 10);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.client, ClientConfig::default());
    }

    #[test]
    fn test_missing_api_key() {
        let config = Config::default();
        match config.require_api_key() {
            Err(Error::Config(ConfigError::MissingApiKey)) => (),
            other => panic!("Expected MissingApiKey, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = Config::from_yaml("api_key: \"  \"\n").unwrap();
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        match Config::load_at(path.to_str()) {
            Err(Error::Config(ConfigError::NotFound(p))) => assert!(p.contains("absent.yaml")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "endpoint: http://localhost:8080/graphql\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint(), "http://localhost:8080/graphql");
        assert!(config.api_key.is_none());
    }
}

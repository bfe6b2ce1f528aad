//! Command execution context
//!
//! Resolves endpoint and API key from flags, environment and the config
//! file, and builds the scan client.

use crate::cli::args::GlobalOptions;
use crate::output;
use mobscan::client::{ApiKey, RawResponse, ScanClient};
use mobscan::config::Config;
use mobscan::error::{ConfigError, Result};

/// Context for command execution
pub struct CommandContext {
    /// Scan client built from the config file's transport settings
    pub client: ScanClient,
    /// Resolved GraphQL endpoint
    pub endpoint: String,
    /// Resolved API key
    pub api_key: ApiKey,
    /// Pretty-print responses
    pub pretty: bool,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file can't be loaded or no API key is
    /// available from any source.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;

        if let Some(endpoint) = opts.endpoint_ref() {
            config.endpoint = Some(endpoint.to_string());
        }
        if let Some(key) = &opts.api_key {
            config.api_key = Some(ApiKey::new(key.clone()));
        }

        let api_key = config.require_api_key()?.clone();
        let endpoint = config.endpoint().to_string();
        if endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint is empty".to_string()).into());
        }
        log::debug!("Using endpoint {}", endpoint);

        let client = ScanClient::new(&config.client)?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            pretty: opts.pretty,
        })
    }

    /// Print a service response to stdout
    pub fn print(&self, response: &RawResponse) {
        println!("{}", output::render(response, self.pretty));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobscan::error::Error;

    fn opts(config: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            endpoint: None,
            api_key: None,
            config: config.to_str().map(str::to_string),
            pretty: false,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "endpoint: https://file.example.com/graphql\napi_key: file-key\n",
        )
        .unwrap();

        let mut options = opts(&path);
        options.endpoint = Some("https://flag.example.com/graphql".to_string());
        options.api_key = Some("flag-key".to_string());

        let ctx = CommandContext::new(&options).unwrap();
        assert_eq!(ctx.endpoint, "https://flag.example.com/graphql");
        assert_eq!(ctx.api_key.expose(), "flag-key");
    }

    #[test]
    fn test_config_file_values_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "endpoint: https://file.example.com/graphql\napi_key: file-key\n",
        )
        .unwrap();

        let ctx = CommandContext::new(&opts(&path)).unwrap();
        assert_eq!(ctx.endpoint, "https://file.example.com/graphql");
        assert_eq!(ctx.api_key.expose(), "file-key");
    }

    #[test]
    fn test_missing_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "endpoint: https://file.example.com/graphql\n").unwrap();

        match CommandContext::new(&opts(&path)) {
            Err(Error::Config(ConfigError::MissingApiKey)) => (),
            Err(other) => panic!("Expected MissingApiKey, got {:?}", other),
            Ok(_) => panic!("Expected MissingApiKey"),
        }
    }
}

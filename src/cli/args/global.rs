//! Global CLI options shared across all commands

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For endpoint and API key the precedence is: CLI flag > environment
/// variable > config file > default. This struct captures the CLI/env layer;
/// config file values are resolved later in `CommandContext`.
#[derive(Clone)]
pub struct GlobalOptions {
    /// Endpoint override
    pub endpoint: Option<String>,

    /// API key override
    pub api_key: Option<String>,

    /// Custom config file path (defaults to ~/.mobscan/config.yaml)
    pub config: Option<String>,

    /// Pretty-print JSON responses
    pub pretty: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            endpoint: cli.endpoint.clone(),
            api_key: cli.api_key.clone(),
            config: cli.config.clone(),
            pretty: cli.pretty,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get endpoint override as `Option<&str>`.
    pub fn endpoint_ref(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

impl std::fmt::Debug for GlobalOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalOptions")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("config", &self.config)
            .field("pretty", &self.pretty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_global_options_from_cli() {
        let cli = Cli::try_parse_from([
            "mobscan",
            "--endpoint",
            "http://localhost:8080/graphql",
            "--api-key",
            "k",
            "--config",
            "/custom/path",
            "--pretty",
            "subscriptions",
        ])
        .unwrap();
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.endpoint_ref(), Some("http://localhost:8080/graphql"));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_key.as_deref(), Some("k"));
        assert!(opts.pretty);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let opts = GlobalOptions {
            endpoint: None,
            api_key: Some("super-secret".to_string()),
            config: None,
            pretty: false,
        };
        assert!(!format!("{:?}", opts).contains("super-secret"));
    }
}

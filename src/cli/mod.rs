//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod credentials;
pub mod scan;
pub mod subscription;

pub use args::GlobalOptions;
pub use context::CommandContext;

/// mobscan - submit mobile applications to the security-scanning service
#[derive(Parser, Debug)]
#[command(name = "mobscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// GraphQL endpoint of the scanning service
    #[arg(long, global = true, env = "MOBSCAN_ENDPOINT", hide_env = true)]
    pub endpoint: Option<String>,

    /// API key (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "MOBSCAN_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "MOBSCAN_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Pretty-print JSON responses
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "MOBSCAN_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload an application binary and create a scan
    Upload(scan::UploadArgs),

    /// Show the progress of a scan
    Progress {
        /// Scan ID
        scan_id: i32,
    },

    /// Show the risk rating of a scan
    Risk {
        /// Scan ID
        scan_id: i32,
    },

    /// Show subscriptions and remaining scans
    Subscriptions,

    /// Create test credentials for use during scans
    Credentials(credentials::CredentialArgs),
}

//! mobscan - client for a GraphQL mobile application security-scanning service
//!
//! Uploads application binaries for scanning, reads scan progress and risk,
//! registers test credentials and checks subscriptions. Every operation
//! returns the service's raw JSON response.
//!
//! ```no_run
//! use mobscan::client::{ApiKey, ScanClient};
//! use mobscan::config::{ClientConfig, DEFAULT_ENDPOINT};
//!
//! # async fn run() -> mobscan::error::Result<()> {
//! let client = ScanClient::new(&ClientConfig::default())?;
//! let key = ApiKey::new("my-api-key");
//! let progress = client.get_progress(DEFAULT_ENDPOINT, 1234, &key).await?;
//! println!("{}", progress);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiKey, Credential, ScanClient, UploadRequest};
pub use error::{Error, Result};

//! Scanning service API client
//!
//! - [`queries`] - GraphQL documents for each operation
//! - [`models`] - typed request variables, request envelope, API key
//! - [`multipart`] - GraphQL multipart upload encoding
//! - [`transport`] - the [`Transport`] seam and its HTTP implementation
//! - [`ScanClient`] - the public operations

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod multipart;
pub mod queries;
pub mod scan_client;
pub mod transport;

pub use models::{ApiKey, Credential, RawResponse};
pub use multipart::{FileAttachment, MultipartBody, MultipartEncoder};
pub use queries::Operation;
pub use scan_client::{ScanClient, UploadRequest};
pub use transport::{HttpTransport, RequestBody, Transport};

//! Request models for the scanning service
//!
//! Typed variables for each GraphQL operation, the request envelope that
//! pairs them with the catalog query, and the API key wrapper.

mod credential;
mod query;
mod scan;
mod secret;

pub use credential::{Credential, CredentialSubmission, CustomCredentialsInput, TestCredentialsInput};
pub use query::InputQuery;
pub use scan::{ScanCreationRequest, ScanReference, UPLOAD_VARIABLE_PATH, UploadMarker};
pub use secret::ApiKey;

/// Response body exactly as returned by the service
pub type RawResponse = String;

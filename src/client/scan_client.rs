//! Scan client: the public operations of the scanning service

use super::models::{
    ApiKey, Credential, CredentialSubmission, InputQuery, RawResponse, ScanCreationRequest,
};
use super::multipart::{FileAttachment, MultipartEncoder};
use super::transport::{HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::Result;

/// Arguments of a scan upload
#[derive(Debug, Clone, Copy)]
pub struct UploadRequest<'a> {
    /// Scan title shown by the service
    pub title: &'a str,
    /// File name sent with the binary
    pub file_name: &'a str,
    pub file_bytes: &'a [u8],
    /// Scan profile name (e.g. `Fast Scan`)
    pub scan_profile: &'a str,
    /// Platform / asset type (e.g. `android`, `ios`)
    pub platform: &'a str,
    /// Previously created test credential to use during the scan
    pub credential_id: Option<i32>,
}

/// Client for the scanning service.
///
/// Holds no per-call state: endpoint and API key are passed to every
/// operation, and every operation returns the raw JSON response text,
/// GraphQL `errors` included.
#[derive(Debug, Clone)]
pub struct ScanClient<T = HttpTransport> {
    transport: T,
}

impl ScanClient<HttpTransport> {
    /// Create a client backed by an HTTP transport
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }
}

impl<T: Transport> ScanClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Progress of a scan
    pub async fn get_progress(
        &self,
        endpoint: &str,
        scan_id: i32,
        api_key: &ApiKey,
    ) -> Result<RawResponse> {
        self.query(endpoint, api_key, &InputQuery::progress(scan_id)).await
    }

    /// Risk rating of a scan
    pub async fn get_risk(
        &self,
        endpoint: &str,
        scan_id: i32,
        api_key: &ApiKey,
    ) -> Result<RawResponse> {
        self.query(endpoint, api_key, &InputQuery::risk(scan_id)).await
    }

    /// Subscriptions, remaining scans and plan limits
    pub async fn check_subscriptions(&self, endpoint: &str, api_key: &ApiKey) -> Result<RawResponse> {
        self.query(endpoint, api_key, &InputQuery::subscriptions()).await
    }

    /// Register custom test credentials for later scans
    pub async fn create_test_credentials(
        &self,
        endpoint: &str,
        credentials: Vec<Credential>,
        api_key: &ApiKey,
    ) -> Result<RawResponse> {
        let submission = CredentialSubmission::custom(credentials);
        self.query(endpoint, api_key, &InputQuery::create_credentials(submission))
            .await
    }

    /// Upload an application binary and create a scan for it
    pub async fn upload_scan(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        upload: &UploadRequest<'_>,
    ) -> Result<RawResponse> {
        let request = ScanCreationRequest::new(
            upload.title,
            upload.platform,
            upload.scan_profile,
            upload.credential_id,
        );
        let operations = InputQuery::create_scan(request);
        let body = MultipartEncoder::encode(
            &operations,
            &FileAttachment::new(upload.file_name, upload.file_bytes),
        )?;

        log::debug!(
            "Running {} for {} ({} bytes)",
            operations.operation().name(),
            upload.file_name,
            upload.file_bytes.len()
        );
        self.transport.run_upload(endpoint, api_key, body).await
    }

    async fn query<V: serde::Serialize>(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        query: &InputQuery<V>,
    ) -> Result<RawResponse> {
        log::debug!("Running {}", query.operation().name());
        let json = query.to_json()?;
        self.transport.run_query(endpoint, api_key, json).await
    }
}

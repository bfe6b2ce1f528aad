//! HTTP transport for GraphQL requests
//!
//! [`Transport`] is the seam between the scan client and the network. The
//! [`HttpTransport`] implementation posts to the endpoint with reqwest and
//! decides success or failure once, from the HTTP status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, CONNECTION, CONTENT_TYPE, HeaderValue};

use super::models::{ApiKey, RawResponse};
use super::multipart::MultipartBody;
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError, Result};

/// Header carrying the plain-text API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Appended to an error body cut at the response size limit
pub const TRUNCATED_MARKER: &str = " [truncated]";

/// Encoded request body with its content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl RequestBody {
    pub fn json(body: String) -> Self {
        Self {
            content_type: JSON_CONTENT_TYPE.to_string(),
            bytes: body.into_bytes(),
        }
    }

    pub fn multipart(body: MultipartBody) -> Self {
        Self {
            content_type: body.content_type(),
            bytes: body.into_bytes(),
        }
    }
}

/// Sends encoded requests to the scanning service
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `endpoint` and return the response text.
    ///
    /// A non-success status is returned as [`ApiError::Rejected`] carrying
    /// the error body.
    async fn post(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        body: RequestBody,
    ) -> Result<RawResponse>;

    /// Plain JSON query or mutation
    async fn run_query(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        json: String,
    ) -> Result<RawResponse> {
        self.post(endpoint, api_key, RequestBody::json(json)).await
    }

    /// Multipart file upload
    async fn run_upload(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        body: MultipartBody,
    ) -> Result<RawResponse> {
        self.post(endpoint, api_key, RequestBody::multipart(body)).await
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    max_response_bytes: usize,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // No idle pooling: every call opens and closes its own connection
        let http = HttpClient::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(0)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            max_response_bytes: config.max_response_bytes,
        })
    }

    /// Read a success body, refusing anything over `max_response_bytes`
    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        if let Some(length) = response.content_length() {
            if length > self.max_response_bytes as u64 {
                return Err(ApiError::InvalidResponse(format!(
                    "Response of {} bytes exceeds limit of {} bytes",
                    length, self.max_response_bytes
                ))
                .into());
            }
        }

        let (bytes, truncated) = read_capped(response, self.max_response_bytes).await?;
        if truncated {
            return Err(ApiError::InvalidResponse(format!(
                "Response exceeds limit of {} bytes",
                self.max_response_bytes
            ))
            .into());
        }
        Ok(bytes)
    }

    /// Read an error body, cutting it at `max_response_bytes`
    async fn read_error_body(&self, response: reqwest::Response) -> Result<String> {
        let (bytes, truncated) = read_capped(response, self.max_response_bytes).await?;
        let mut body = String::from_utf8_lossy(&bytes).into_owned();
        if truncated {
            body.push_str(TRUNCATED_MARKER);
        }
        Ok(body)
    }
}

/// Read chunks until the body ends or `limit` bytes are buffered.
///
/// Returns the bytes kept and whether the body went past the limit.
async fn read_capped(mut response: reqwest::Response, limit: usize) -> Result<(Vec<u8>, bool)> {
    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(ApiError::from)? {
        let room = limit - bytes.len();
        if chunk.len() > room {
            bytes.extend_from_slice(&chunk[..room]);
            return Ok((bytes, true));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok((bytes, false))
}

/// Parse and sanity-check an endpoint URL
pub fn parse_endpoint(endpoint: &str) -> Result<reqwest::Url> {
    let url = reqwest::Url::parse(endpoint)
        .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

    match url.scheme() {
        "https" => {}
        "http" => log::warn!("Sending API key over plain HTTP to {}", url),
        other => {
            return Err(ApiError::InvalidEndpoint(format!(
                "{}: unsupported scheme '{}'",
                endpoint, other
            ))
            .into());
        }
    }
    Ok(url)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        body: RequestBody,
    ) -> Result<RawResponse> {
        let url = parse_endpoint(endpoint)?;

        let mut key = HeaderValue::from_str(api_key.expose()).map_err(|_| {
            ConfigError::Invalid("API key contains characters not allowed in a header".to_string())
        })?;
        key.set_sensitive(true);

        log::debug!(
            "POST {} ({}, {} bytes)",
            url,
            body.content_type,
            body.bytes.len()
        );

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, body.content_type)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONNECTION, "Keep-Alive")
            .header(API_KEY_HEADER, key)
            .body(body.bytes)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("Response status: {}", status);

        if !status.is_success() {
            let body = self.read_error_body(response).await?;
            log::warn!("Request rejected with status {}", status);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let bytes = self.read_body(response).await?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ApiError::InvalidResponse(format!("Response body is not UTF-8: {}", e)))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_parse_endpoint_accepts_https() {
        let url = parse_endpoint("https://api.example.com/graphql").unwrap();
        assert_eq!(url.host_str(), Some("api.example.com"));
    }

    #[test]
    fn test_parse_endpoint_rejects_garbage() {
        match parse_endpoint("not a url") {
            Err(Error::Api(ApiError::InvalidEndpoint(msg))) => assert!(msg.contains("not a url")),
            other => panic!("Expected InvalidEndpoint, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_endpoint_rejects_other_schemes() {
        assert!(parse_endpoint("ftp://example.com/graphql").is_err());
    }

    #[test]
    fn test_json_body_content_type() {
        let body = RequestBody::json("{}".to_string());
        assert_eq!(body.content_type, "application/json");
        assert_eq!(body.bytes, b"{}");
    }
}

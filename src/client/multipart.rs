//! GraphQL multipart upload encoding
//!
//! Builds the `multipart/form-data` body used to send a file alongside a
//! GraphQL mutation:
//!
//! 1. `operations`: the JSON request envelope, with the upload variable set to `null`
//! 2. `0`: the raw file bytes
//! 3. `map`: `{"0":["variables.application"]}`, binding part `0` to the variable
//!
//! Part order matters to the service and is fixed.

use chrono::Utc;
use serde::Serialize;

use super::models::{InputQuery, UPLOAD_VARIABLE_PATH};
use crate::error::{ApiError, Result};

const TWO_HYPHENS: &[u8] = b"--";
const LINE_END: &[u8] = b"\r\n";

/// Form field carrying the request envelope
pub const OPERATIONS_FIELD: &str = "operations";
/// Form field carrying the file
pub const FILE_FIELD: &str = "0";
/// Form field carrying the file-to-variable map
pub const MAP_FIELD: &str = "map";

const FILE_CONTENT_TYPE: &str = "application/zip";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Give up on drawing a boundary absent from the payload after this many tries
const MAX_BOUNDARY_ATTEMPTS: usize = 8;

/// File to attach to an upload
#[derive(Debug, Clone, Copy)]
pub struct FileAttachment<'a> {
    pub file_name: &'a str,
    pub bytes: &'a [u8],
}

impl<'a> FileAttachment<'a> {
    pub fn new(file_name: &'a str, bytes: &'a [u8]) -> Self {
        Self { file_name, bytes }
    }
}

/// Fully encoded multipart request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encoder for GraphQL multipart uploads. Holds no state; every call draws
/// its own boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipartEncoder;

impl MultipartEncoder {
    /// Encode a request envelope and one file into a multipart body
    pub fn encode<V: Serialize>(
        operations: &InputQuery<V>,
        file: &FileAttachment<'_>,
    ) -> Result<MultipartBody> {
        let operations_json = operations.to_json()?;
        let map_json = file_map_json()?;

        let boundary = fresh_boundary(
            &[
                operations_json.as_bytes(),
                file.bytes,
                file.file_name.as_bytes(),
            ],
            new_boundary,
        )?;

        let mut bytes = Vec::with_capacity(
            operations_json.len() + file.bytes.len() + map_json.len() + 512,
        );

        write_boundary(&mut bytes, &boundary);
        write_part(
            &mut bytes,
            &boundary,
            &format!("name=\"{}\"", OPERATIONS_FIELD),
            JSON_CONTENT_TYPE,
            operations_json.as_bytes(),
        );
        write_part(
            &mut bytes,
            &boundary,
            &format!(
                "name=\"{}\"; filename=\"{}\"",
                FILE_FIELD,
                escape_quoted(file.file_name)
            ),
            FILE_CONTENT_TYPE,
            file.bytes,
        );
        write_part(
            &mut bytes,
            &boundary,
            &format!("name=\"{}\"", MAP_FIELD),
            JSON_CONTENT_TYPE,
            map_json.as_bytes(),
        );

        // Replace the trailing delimiter line with the close delimiter
        bytes.truncate(bytes.len() - LINE_END.len());
        bytes.extend_from_slice(TWO_HYPHENS);
        bytes.extend_from_slice(LINE_END);

        log::debug!(
            "Encoded multipart upload: {} bytes, file {} ({} bytes)",
            bytes.len(),
            file.file_name,
            file.bytes.len()
        );

        Ok(MultipartBody { boundary, bytes })
    }
}

/// `--BOUNDARY\r\n`
fn write_boundary(out: &mut Vec<u8>, boundary: &str) {
    out.extend_from_slice(TWO_HYPHENS);
    out.extend_from_slice(boundary.as_bytes());
    out.extend_from_slice(LINE_END);
}

/// Part headers, blank line, body, then the next delimiter line
fn write_part(out: &mut Vec<u8>, boundary: &str, disposition: &str, content_type: &str, body: &[u8]) {
    out.extend_from_slice(b"Content-Disposition: form-data; ");
    out.extend_from_slice(disposition.as_bytes());
    out.extend_from_slice(LINE_END);
    out.extend_from_slice(b"Content-Type: ");
    out.extend_from_slice(content_type.as_bytes());
    out.extend_from_slice(LINE_END);
    out.extend_from_slice(LINE_END);
    out.extend_from_slice(body);
    out.extend_from_slice(LINE_END);
    write_boundary(out, boundary);
}

/// `{"0":["variables.application"]}`
fn file_map_json() -> Result<String> {
    let map = serde_json::json!({ FILE_FIELD: [UPLOAD_VARIABLE_PATH] });
    Ok(serde_json::to_string(&map)?)
}

fn new_boundary() -> String {
    format!(
        "----MobscanBoundary{:x}{:016x}",
        Utc::now().timestamp_millis(),
        rand::random::<u64>()
    )
}

/// Draw a boundary that does not occur in any of the payloads
fn fresh_boundary(payloads: &[&[u8]], mut draw: impl FnMut() -> String) -> Result<String> {
    for _ in 0..MAX_BOUNDARY_ATTEMPTS {
        let boundary = draw();
        if !payloads
            .iter()
            .any(|payload| contains(payload, boundary.as_bytes()))
        {
            return Ok(boundary);
        }
        log::debug!("Multipart boundary collided with payload, drawing another");
    }
    Err(ApiError::Encoding(format!(
        "no multipart boundary absent from the payload after {} attempts",
        MAX_BOUNDARY_ATTEMPTS
    ))
    .into())
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty()
        && haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}

/// Escape a value for use inside a quoted header parameter
fn escape_quoted(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

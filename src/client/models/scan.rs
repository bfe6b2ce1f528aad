//! Scan variables

use serde::{Deserialize, Serialize};

/// Path of the upload variable inside the `operations` document.
///
/// The multipart `map` part points the file part at this path, so it must
/// name the `application` field of [`ScanCreationRequest`].
pub const UPLOAD_VARIABLE_PATH: &str = "variables.application";

/// Variables for the progress and risk lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReference {
    pub scan_id: i32,
}

impl ScanReference {
    pub fn new(scan_id: i32) -> Self {
        Self { scan_id }
    }
}

/// Placeholder for an `Upload!` variable.
///
/// Serializes as `null`; the server substitutes the file part named by the
/// multipart `map` document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadMarker;

impl Serialize for UploadMarker {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_none()
    }
}

impl<'de> Deserialize<'de> for UploadMarker {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        Option::<()>::deserialize(deserializer)?;
        Ok(UploadMarker)
    }
}

/// Variables for the create-mobile-scan mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCreationRequest {
    pub title: String,

    /// Platform of the uploaded binary (e.g. `android`, `ios`)
    pub asset_type: String,

    pub application: UploadMarker,

    pub scan_profile: String,

    /// `null` when not supplied; the service treats `[]` differently.
    pub credential_ids: Option<Vec<i32>>,
}

impl ScanCreationRequest {
    pub fn new(
        title: impl Into<String>,
        asset_type: impl Into<String>,
        scan_profile: impl Into<String>,
        credential_id: Option<i32>,
    ) -> Self {
        Self {
            title: title.into(),
            asset_type: asset_type.into(),
            application: UploadMarker,
            scan_profile: scan_profile.into(),
            credential_ids: credential_id.map(|id| vec![id]),
        }
    }
}

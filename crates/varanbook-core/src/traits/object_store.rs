//! Object storage trait for pre-signed uploads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// What an upload is for; determines the key prefix inside the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPurpose {
    /// Profile photo.
    Photo,
    /// Horoscope document.
    Horoscope,
}

impl UploadPurpose {
    /// Key prefix used for this purpose.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Photo => "photos",
            Self::Horoscope => "horoscopes",
        }
    }
}

/// A pre-signed upload slot: the URL the client PUTs to and the object key
/// recorded against the profile.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PresignedUpload {
    /// URL accepting a single PUT until it expires.
    pub url: String,
    /// Object key within the bucket.
    pub key: String,
    /// URL lifetime in seconds.
    pub expires_in_seconds: u64,
}

/// Trait for object storage backends that can mint pre-signed PUT URLs.
///
/// Upload bytes never transit this service; clients upload directly to the
/// store using the returned URL.
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Create a pre-signed PUT URL for an upload scoped to a tenant.
    async fn presign_put(
        &self,
        purpose: UploadPurpose,
        tenant_id: Uuid,
        filename: &str,
        content_type: &str,
    ) -> AppResult<PresignedUpload>;
}

//! S3-backed [`ObjectStore`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::presigning::PresigningConfig;
use tracing::info;
use uuid::Uuid;

use varanbook_core::config::storage::StorageConfig;
use varanbook_core::error::AppError;
use varanbook_core::result::AppResult;
use varanbook_core::traits::object_store::{ObjectStore, PresignedUpload, UploadPurpose};

/// Mints pre-signed PUT URLs against a single configured bucket.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    presign_expiry: Duration,
}

impl S3ObjectStore {
    /// Create a new store from configuration, using the ambient AWS
    /// credential chain.
    pub async fn new(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        info!(bucket = %config.bucket, region = %config.region, "Initializing S3 object store");

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: config.bucket.clone(),
            presign_expiry: Duration::from_secs(config.presign_expiry_seconds),
        }
    }

    /// Build the object key: purpose prefix, tenant partition, random
    /// component, sanitized filename.
    fn object_key(purpose: UploadPurpose, tenant_id: Uuid, filename: &str) -> String {
        let safe: String = filename
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!(
            "{}/{}/{}-{}",
            purpose.prefix(),
            tenant_id,
            Uuid::new_v4(),
            safe
        )
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn presign_put(
        &self,
        purpose: UploadPurpose,
        tenant_id: Uuid,
        filename: &str,
        content_type: &str,
    ) -> AppResult<PresignedUpload> {
        let key = Self::object_key(purpose, tenant_id, filename);

        let presigning = PresigningConfig::expires_in(self.presign_expiry)
            .map_err(|e| AppError::external_service(format!("Invalid presign expiry: {e}")))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::external_service(format!("Failed to presign upload: {e}")))?;

        Ok(PresignedUpload {
            url: request.uri().to_string(),
            key,
            expires_in_seconds: self.presign_expiry.as_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_is_tenant_partitioned_and_sanitized() {
        let tenant_id = Uuid::new_v4();
        let key = S3ObjectStore::object_key(UploadPurpose::Photo, tenant_id, "my photo (1).jpg");

        assert!(key.starts_with(&format!("photos/{tenant_id}/")));
        assert!(key.ends_with("my_photo__1_.jpg"));
        assert!(!key.contains(' '));
    }
}

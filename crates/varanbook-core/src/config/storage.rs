//! Object storage configuration (pre-signed uploads).

use serde::{Deserialize, Serialize};

/// S3 object storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bucket receiving profile photos and horoscope documents.
    pub bucket: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Pre-signed URL lifetime in seconds.
    #[serde(default = "default_presign_expiry")]
    pub presign_expiry_seconds: u64,
}

fn default_region() -> String {
    "ap-south-1".to_string()
}

fn default_presign_expiry() -> u64 {
    3600
}

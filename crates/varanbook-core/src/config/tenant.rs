//! Tenant resolution configuration.

use serde::{Deserialize, Serialize};

/// Tenant resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantConfig {
    /// Header carrying an explicit tenant ID. Takes priority over
    /// hostname-derived resolution.
    #[serde(default = "default_header")]
    pub id_header: String,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            id_header: default_header(),
        }
    }
}

fn default_header() -> String {
    "x-tenant-id".to_string()
}

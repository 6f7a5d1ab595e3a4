//! Email relay configuration.

use serde::{Deserialize, Serialize};

/// Settings for the transactional email relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled. When disabled, sends are logged
    /// and dropped.
    #[serde(default)]
    pub enabled: bool,
    /// HTTP endpoint of the relay service.
    #[serde(default)]
    pub relay_url: String,
    /// From address for all outbound mail.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Base URL of the frontend, used to build reset links.
    #[serde(default = "default_frontend")]
    pub frontend_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            relay_url: String::new(),
            from_address: default_from(),
            frontend_url: default_frontend(),
        }
    }
}

fn default_from() -> String {
    "noreply@varanbook.in".to_string()
}

fn default_frontend() -> String {
    "http://localhost:5173".to_string()
}

//! HTTP relay implementation of the [`Mailer`] trait.

use async_trait::async_trait;
use tracing::info;

use varanbook_core::config::email::EmailConfig;
use varanbook_core::error::AppError;
use varanbook_core::result::AppResult;
use varanbook_core::traits::mailer::{EmailTemplate, Mailer};

/// Sends templated mail through a JSON HTTP relay.
///
/// When email is disabled in configuration, sends are logged and dropped
/// so development environments work without a relay.
#[derive(Debug, Clone)]
pub struct RelayMailer {
    client: reqwest::Client,
    config: EmailConfig,
}

impl RelayMailer {
    /// Create a new relay mailer.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(
        &self,
        to: &str,
        template: EmailTemplate,
        params: serde_json::Value,
    ) -> AppResult<()> {
        if !self.config.enabled {
            info!(to, ?template, "Email disabled; dropping message");
            return Ok(());
        }

        let body = serde_json::json!({
            "from": self.config.from_address,
            "to": to,
            "template": template,
            "params": params,
        });

        self.client
            .post(&self.config.relay_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Email relay request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::external_service(format!("Email relay rejected message: {e}")))?;

        Ok(())
    }
}

use serde::Serialize;

use super::{ContactMessage, EmailDelivery};
use crate::common::DeliveryError;
use crate::config::EmailConfig;
use crate::forms::ContactForm;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: ContactMessage,
}

/// Client for the EmailJS REST send endpoint.
pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    /// JSON payload for one enquiry, addressed to the configured inbox.
    pub fn request_body(&self, enquiry: &ContactForm) -> Result<serde_json::Value, DeliveryError> {
        enquiry.validate()?;
        let public_key = self
            .config
            .public_key
            .as_deref()
            .ok_or(DeliveryError::NotConfigured)?;

        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: enquiry.to_message(&self.config.inbox),
        };

        serde_json::to_value(&request).map_err(|e| DeliveryError::InvalidMessage(e.to_string()))
    }

    pub async fn send(&self, enquiry: &ContactForm) -> Result<(), DeliveryError> {
        let body = self.request_body(enquiry)?;

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            log::info!("Contact message delivered to {}", self.config.inbox);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

impl EmailDelivery for EmailJsClient {
    async fn deliver(&self, enquiry: &ContactForm) -> Result<(), DeliveryError> {
        self.send(enquiry).await
    }
}

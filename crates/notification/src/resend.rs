//! Resend HTTP API transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{Delivery, Mailer, OutgoingEmail, ResendConfig, SendError};

#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

impl ResendMailer {
    pub fn new(config: &ResendConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            api_key_env: config.api_key_env.clone(),
        })
    }

    /// Configured key, else the environment variable as it is right now.
    fn credential(&self) -> Result<String, SendError> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Ok(key.clone());
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(SendError::Credential(format!(
                "Missing API key: {} is not set",
                self.api_key_env
            ))),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, SendError> {
        let api_key = self.credential()?;

        let request = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            return response
                .json::<Delivery>()
                .await
                .map_err(|e| SendError::Transport(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message);

        tracing::warn!(status = status.as_u16(), error = ?message, "Resend refused the email");

        // Any error object the provider sends back is reported as-is, 5xx included.
        Err(match (status, message) {
            (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, Some(message)) => {
                SendError::Credential(message)
            }
            (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, None) => {
                SendError::Credential(format!("Provider responded with status {status}"))
            }
            (_, Some(message)) => SendError::Rejected(message),
            (_, None) => {
                SendError::Transport(format!("Provider responded with status {status}"))
            }
        })
    }
}

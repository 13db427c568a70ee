use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{Envelope, Inquiry};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay returned an unreadable response ({status}): {reason}")]
    Decode { status: u16, reason: String },

    #[error("{0}")]
    Failed(String),
}

/// Remote function that turns an inquiry into an email.
#[async_trait]
pub trait Relay: Send + Sync {
    /// Sends one inquiry. Anything other than a success envelope is an error.
    async fn send(&self, inquiry: &Inquiry) -> Result<Value, RelayError>;
}

#[derive(Clone)]
pub struct HttpRelay {
    client: Client,
    url: String,
    anon_key: Option<String>,
}

impl HttpRelay {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            anon_key: None,
        }
    }

    /// Public key expected by the function host, sent as bearer token and `apikey`.
    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn send(&self, inquiry: &Inquiry) -> Result<Value, RelayError> {
        let mut request = self.client.post(&self.url).json(inquiry);
        if let Some(key) = &self.anon_key {
            request = request.bearer_auth(key).header("apikey", key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let envelope: Envelope =
            serde_json::from_slice(&body).map_err(|e| RelayError::Decode {
                status: status.as_u16(),
                reason: e.to_string(),
            })?;

        tracing::debug!(status = status.as_u16(), success = envelope.success, "Relay responded");

        if envelope.success {
            return Ok(envelope.data.unwrap_or(Value::Null));
        }

        Err(RelayError::Failed(envelope.error.unwrap_or_else(|| {
            format!("relay responded with status {status}")
        })))
    }
}

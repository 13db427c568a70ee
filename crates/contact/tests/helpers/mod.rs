use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{Router, http::StatusCode, routing::post};
use serde_json::Value;
use zeno_contact::{ContactForm, Inquiry, Relay, RelayError};

pub fn jane_doe() -> Inquiry {
    Inquiry {
        name: "Jane Doe".to_owned(),
        email: "jane@x.com".to_owned(),
        project_type: "Motion Graphics".to_owned(),
        budget: "$1,000 - $2,000".to_owned(),
        message: "Need a 30s explainer.".to_owned(),
    }
}

pub fn filled_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.edit(|draft| *draft = jane_doe());
    form
}

/// Relay double that counts calls and answers with a fixed result.
#[derive(Clone, Default)]
pub struct CountingRelay {
    pub calls: Arc<AtomicUsize>,
    pub fail_with: Option<String>,
}

impl CountingRelay {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Arc::default(),
            fail_with: Some(message.to_owned()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Relay for CountingRelay {
    async fn send(&self, _inquiry: &Inquiry) -> Result<Value, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.fail_with {
            Some(message) => Err(RelayError::Failed(message.clone())),
            None => Ok(serde_json::json!({"id": "fake"})),
        }
    }
}

/// Serves a fixed status and body on `/send-contact-email`, returns its URL.
pub async fn spawn_function(status: StatusCode, body: &'static str) -> anyhow::Result<String> {
    let app = Router::new().route(
        "/send-contact-email",
        post(move || async move { (status, [("content-type", "application/json")], body) }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{addr}/send-contact-email"))
}

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use zeno::{AppState, Config};
use zeno_notification::{Delivery, LogMailer, Mailer, OutgoingEmail, SendError};

pub fn test_config() -> Config {
    Config::from_toml(
        r#"
[email]
transport = "log"
recipient = "studio@example.com"
brand = "The Zeno Creatives"
"#,
    )
    .unwrap()
}

pub fn test_app(mailer: Arc<dyn Mailer>) -> Router {
    let state = AppState::with_mailer(&test_config(), mailer).unwrap();
    zeno::routes::router(state)
}

pub fn log_app() -> (Router, LogMailer) {
    let mailer = LogMailer::default();
    (test_app(Arc::new(mailer.clone())), mailer)
}

pub fn jane_doe() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "projectType": "Motion Graphics",
        "budget": "$1,000 - $2,000",
        "message": "Need a 30s explainer."
    })
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body.to_vec())
}

pub async fn call_json(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let (status, headers, body) = call(app, request).await;
    let value = serde_json::from_slice(&body).expect("response body should be JSON");

    (status, headers, value)
}

/// Mailer double whose provider always answers with the same error.
pub struct FailingMailer(pub fn(String) -> SendError, pub &'static str);

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<Delivery, SendError> {
        Err((self.0)(self.1.to_owned()))
    }
}

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use zeno_notification::{Mailer, OutgoingEmail, ResendConfig, ResendMailer, SendError};

#[derive(Clone)]
struct FakeProvider {
    status: StatusCode,
    body: Value,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn emails(
    State(provider): State<FakeProvider>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    provider.seen.lock().unwrap().push((auth, payload));

    (provider.status, Json(provider.body.clone()))
}

async fn spawn_provider(status: StatusCode, body: Value) -> (ResendMailer, FakeProvider) {
    let provider = FakeProvider {
        status,
        body,
        seen: Arc::default(),
    };

    let app = Router::new()
        .route("/emails", post(emails))
        .with_state(provider.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let mailer = ResendMailer::new(&ResendConfig {
        api_key: Some("re_test_key".to_owned()),
        api_key_env: "RESEND_API_KEY".to_owned(),
        base_url: format!("http://{addr}/"),
        timeout_secs: 5,
    })
    .unwrap();

    (mailer, provider)
}

fn email() -> OutgoingEmail {
    OutgoingEmail {
        from: "\"Jane Doe via The Zeno Creatives\" <onboarding@resend.dev>".to_owned(),
        to: vec!["studio@zenocreatives.com".to_owned()],
        reply_to: Some("jane@x.com".to_owned()),
        subject: "New Project Inquiry from Jane Doe".to_owned(),
        html: "<p>Need a 30s explainer.</p>".to_owned(),
        text: "Need a 30s explainer.".to_owned(),
    }
}

#[tokio::test]
async fn test_accepted_email_returns_provider_id() {
    let (mailer, provider) =
        spawn_provider(StatusCode::OK, json!({"id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"})).await;

    let delivery = mailer.send(&email()).await.unwrap();
    assert_eq!(delivery.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");

    let seen = provider.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("Bearer re_test_key"));
    assert_eq!(seen[0].1["reply_to"], "jane@x.com");
    assert_eq!(seen[0].1["to"], json!(["studio@zenocreatives.com"]));
    assert_eq!(seen[0].1["subject"], "New Project Inquiry from Jane Doe");
}

#[tokio::test]
async fn test_validation_error_is_rejected_with_provider_message() {
    let (mailer, _) = spawn_provider(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"statusCode": 422, "name": "validation_error", "message": "Invalid `to` field."}),
    )
    .await;

    let err = mailer.send(&email()).await.unwrap_err();
    assert!(err.is_rejected());
    assert_eq!(err.to_string(), "Invalid `to` field.");
}

#[tokio::test]
async fn test_rate_limit_is_rejected() {
    let (mailer, _) = spawn_provider(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"name": "rate_limit_exceeded", "message": "Too many requests."}),
    )
    .await;

    let err = mailer.send(&email()).await.unwrap_err();
    assert!(err.is_rejected());
}

#[tokio::test]
async fn test_invalid_key_is_a_credential_error() {
    let (mailer, _) = spawn_provider(
        StatusCode::UNAUTHORIZED,
        json!({"name": "validation_error", "message": "API key is invalid"}),
    )
    .await;

    let err = mailer.send(&email()).await.unwrap_err();
    assert!(matches!(err, SendError::Credential(ref m) if m == "API key is invalid"));
}

#[tokio::test]
async fn test_server_error_object_is_rejected_with_provider_message() {
    let (mailer, _) = spawn_provider(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"name": "application_error", "message": "An unexpected error occurred."}),
    )
    .await;

    let err = mailer.send(&email()).await.unwrap_err();
    assert!(err.is_rejected());
    assert_eq!(err.to_string(), "An unexpected error occurred.");
}

#[tokio::test]
async fn test_unreadable_outage_is_a_transport_error() {
    let (mailer, _) = spawn_provider(StatusCode::SERVICE_UNAVAILABLE, json!("down")).await;

    let err = mailer.send(&email()).await.unwrap_err();
    assert!(matches!(err, SendError::Transport(_)));
    assert!(err.to_string().contains("503"));
}

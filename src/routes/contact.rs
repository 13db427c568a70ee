use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use zeno_contact::{Envelope, Inquiry};

use crate::routes::AppState;

/// OPTIONS /send-contact-email
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST /send-contact-email
///
/// Always answers with an [`Envelope`]: 200 when the provider accepted the
/// email, 400 when it rejected it, 500 for everything else.
pub async fn action(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "Unreadable contact submission body");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, Envelope::failed(e.body_text()));
        }
    };

    let inquiry = match serde_json::from_slice::<Inquiry>(&body) {
        Ok(inquiry) => inquiry,
        Err(e) => {
            tracing::error!(error = %e, "Unreadable contact submission");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, Envelope::failed(e.to_string()));
        }
    };

    match state.notifier.notify(&inquiry).await {
        Ok(delivery) => reply(StatusCode::OK, Envelope::ok(json!({ "id": delivery.id }))),
        Err(e) if e.is_rejected() => {
            tracing::warn!(error = %e, "Email provider rejected the message");
            reply(StatusCode::BAD_REQUEST, Envelope::failed(e.to_string()))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in send-contact-email function");
            reply(StatusCode::INTERNAL_SERVER_ERROR, Envelope::failed(e.to_string()))
        }
    }
}

/// GET /contact/options - choices for the form selects
pub async fn options(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.as_ref().clone())
}

fn reply(status: StatusCode, envelope: Envelope) -> Response {
    (status, Json(envelope)).into_response()
}

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use zeno_portfolio::CategoryFilter;

use crate::routes::AppState;

#[derive(Deserialize, Default)]
pub struct WorkQuery {
    pub category: Option<String>,
}

/// GET /work?category=Motion
pub async fn list(State(state): State<AppState>, Query(query): Query<WorkQuery>) -> Response {
    let filter = match query.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(value) => match value.parse::<CategoryFilter>() {
            Ok(filter) => filter,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Unknown category '{value}'") })),
                )
                    .into_response();
            }
        },
    };

    Json(state.portfolio.cards(filter)).into_response()
}

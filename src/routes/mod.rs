use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use zeno_contact::{Catalog, FormSettings};
use zeno_notification::{ContactNotifier, Mailer};
use zeno_portfolio::Portfolio;

use crate::config::Config;

mod contact;
mod health;
mod work;

#[derive(Clone)]
pub struct AppState {
    pub notifier: ContactNotifier,
    pub catalog: Arc<Catalog>,
    pub settings: Arc<FormSettings>,
    pub portfolio: Arc<Portfolio>,
}

impl AppState {
    /// State with the mailer selected by `config.email.transport`.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mailer = zeno_notification::build_mailer(&config.email)?;
        Self::with_mailer(config, mailer)
    }

    pub fn with_mailer(config: &Config, mailer: Arc<dyn Mailer>) -> anyhow::Result<Self> {
        let catalog = config
            .contact
            .catalog()
            .ok_or_else(|| anyhow::anyhow!("unknown contact preset '{}'", config.contact.preset))?;

        Ok(Self {
            notifier: ContactNotifier::new(mailer, &config.email),
            catalog: Arc::new(catalog),
            settings: Arc::new(config.contact.settings()),
            portfolio: Arc::new(config.portfolio.clone()),
        })
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/send-contact-email",
            post(contact::action).options(contact::preflight),
        )
        .route("/contact/options", get(contact::options))
        .route("/work", get(work::list))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("authorization, x-client-info, apikey, content-type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
}

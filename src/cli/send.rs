use anyhow::{Result, anyhow, bail};
use zeno_contact::{ContactForm, HttpRelay, SubmitOutcome, ToastKind};

use crate::config::Config;

/// Field values for a one-off submission from the command line.
#[derive(Debug, Clone, Default)]
pub struct SendInput {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
    /// Overrides `relay.url`.
    pub url: Option<String>,
}

/// Submits one inquiry through the relay, exactly as the site's form does.
pub async fn send(config: Config, input: SendInput) -> Result<()> {
    let catalog = config
        .contact
        .catalog()
        .ok_or_else(|| anyhow!("unknown contact preset '{}'", config.contact.preset))?;

    let mut form = ContactForm::new(catalog, config.contact.settings());
    form.edit(|draft| {
        draft.name = input.name;
        draft.email = input.email;
        draft.project_type = input.project_type;
        draft.budget = input.budget;
        draft.message = input.message;
    });

    let mut relay = HttpRelay::new(input.url.unwrap_or(config.relay.url));
    if let Some(key) = config.relay.anon_key {
        relay = relay.anon_key(key);
    }

    tracing::info!(url = %relay.url(), "Sending inquiry");

    match form.submit(&relay).await {
        SubmitOutcome::Finished(toast) if toast.kind == ToastKind::Success => {
            tracing::info!(title = %toast.title, "{}", toast.description);
            Ok(())
        }
        SubmitOutcome::Finished(toast) => {
            tracing::error!(title = %toast.title, "{}", toast.description);
            bail!("{}", toast.title)
        }
        SubmitOutcome::Incomplete(e) => {
            bail!("missing or invalid fields: {}", e.invalid_fields().join(", "))
        }
        SubmitOutcome::Busy => bail!("a submission is already in flight"),
    }
}

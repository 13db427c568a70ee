use std::sync::Arc;

use zeno_contact::Inquiry;

use crate::{Delivery, EmailConfig, Mailer, OutgoingEmail, SendError, render_inquiry};

/// Turns an inquiry into the operator notification and hands it to a mailer.
#[derive(Clone)]
pub struct ContactNotifier {
    mailer: Arc<dyn Mailer>,
    sender: String,
    recipient: String,
    brand: String,
}

impl ContactNotifier {
    pub fn new(mailer: Arc<dyn Mailer>, config: &EmailConfig) -> Self {
        Self {
            mailer,
            sender: config.from_address.clone(),
            recipient: config.recipient.clone(),
            brand: config.brand.clone(),
        }
    }

    pub fn compose(&self, inquiry: &Inquiry) -> anyhow::Result<OutgoingEmail> {
        let (html, text) = render_inquiry(inquiry, &self.brand)?;

        let display = format!("{} via {}", inquiry.name, self.brand)
            .replace(['"', '\\', '\r', '\n'], "");

        Ok(OutgoingEmail {
            from: format!("\"{display}\" <{}>", self.sender),
            to: vec![self.recipient.clone()],
            reply_to: Some(inquiry.email.clone()),
            subject: format!("New Project Inquiry from {}", inquiry.name),
            html,
            text,
        })
    }

    #[tracing::instrument(
        skip_all,
        fields(
            name = %inquiry.name,
            email = %inquiry.email,
            project_type = %inquiry.project_type,
            budget = %inquiry.budget,
        )
    )]
    pub async fn notify(&self, inquiry: &Inquiry) -> Result<Delivery, SendError> {
        tracing::info!("Received contact form submission");

        let email = self.compose(inquiry)?;
        let delivery = self.mailer.send(&email).await?;

        tracing::info!(id = %delivery.id, "Email sent successfully");

        Ok(delivery)
    }
}

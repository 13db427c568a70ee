//! SMTP transport using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use ulid::Ulid;

use crate::{Delivery, Mailer, OutgoingEmail, SendError, SmtpConfig};

#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
    domain: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, from_address: &str) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                from = %from_address,
                "SMTP transport initialized with authentication and TLS"
            );

            let creds = Credentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        let domain = from_address
            .rsplit_once('@')
            .map(|(_, domain)| domain.trim_end_matches('>').to_owned())
            .unwrap_or_else(|| "localhost".to_owned());

        Ok(Self { mailer, domain })
    }

    fn build(&self, email: &OutgoingEmail, id: &str) -> Result<Message, SendError> {
        let mut builder = Message::builder()
            .from(mailbox(&email.from)?)
            .subject(email.subject.as_str())
            .message_id(Some(format!("<{id}@{}>", self.domain)));

        for to in &email.to {
            builder = builder.to(mailbox(to)?);
        }

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(mailbox(reply_to)?);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| SendError::Unknown(e.into()))
    }
}

fn mailbox(value: &str) -> Result<Mailbox, SendError> {
    value
        .parse()
        .map_err(|e| SendError::Rejected(format!("Invalid address `{value}`: {e}")))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, SendError> {
        let id = Ulid::new().to_string();
        let message = self.build(email, &id)?;
        let mailer = self.mailer.clone();

        let result = tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| SendError::Unknown(e.into()))?;

        match result {
            Ok(_) => Ok(Delivery { id }),
            Err(e) if e.is_permanent() => Err(SendError::Rejected(e.to_string())),
            Err(e) => Err(SendError::Transport(e.to_string())),
        }
    }
}

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ulid::Ulid;

use crate::{Delivery, Mailer, OutgoingEmail, SendError};

/// Keeps messages in memory and logs them instead of delivering.
#[derive(Clone, Default)]
pub struct LogMailer {
    outbox: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl LogMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, SendError> {
        let id = Ulid::new().to_string();

        tracing::info!(
            id = %id,
            to = ?email.to,
            reply_to = ?email.reply_to,
            subject = %email.subject,
            "Email captured by log transport"
        );

        self.outbox
            .lock()
            .map_err(|e| SendError::Unknown(anyhow::anyhow!("outbox poisoned: {e}")))?
            .push(email.clone());

        Ok(Delivery { id })
    }
}

use async_trait::async_trait;
use mailer_application::ports::outgoing::email_provider::{
    EmailProviderPort, OutgoingEmail, ProviderError, ProviderReceipt,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Development backend: logs the message instead of delivering it.
pub struct ConsoleEmailProvider;

impl ConsoleEmailProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailProviderPort for ConsoleEmailProvider {
    #[instrument(skip(self, email), fields(recipient = %email.to))]
    async fn send_email(&self, email: &OutgoingEmail) -> Result<ProviderReceipt, ProviderError> {
        let id = Uuid::new_v4().to_string();

        info!(
            message_id = %id,
            from = %email.from,
            recipient = %email.to,
            subject = %email.subject,
            "📧 EMAIL (Console Email Provider)"
        );
        debug!("{}", email.html);

        Ok(ProviderReceipt { id })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use domain::email::EmailAddress;

    #[tokio::test]
    async fn always_accepts_with_fresh_id() {
        let provider = ConsoleEmailProvider::new();
        let email = OutgoingEmail {
            from: "Celeriz <team@celeriz.com>".to_string(),
            to: EmailAddress::parse("user@example.com").unwrap(),
            subject: "Hello".to_string(),
            html: "<p>Hi</p>".to_string(),
        };

        let first = provider.send_email(&email).await.unwrap();
        let second = provider.send_email(&email).await.unwrap();

        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_ne!(first.id, second.id);
    }
}

use tracing::{error, info, instrument};

use crate::config::SenderIdentity;
use crate::error::AppResult;
use crate::notifications::templates::{EmailTemplate, TemplateRenderer};
use crate::ports::incoming::notifications::NotificationUseCase;
use crate::ports::outgoing::email_provider::{DynEmailProviderPort, OutgoingEmail};
use domain::notification::{SendRequest, SendResult, TemplateParams};

const LOGO_URL_PARAM: &str = "logo_url";
const SUPPORT_EMAIL_PARAM: &str = "support_email";

pub struct NotificationService {
    email_provider: DynEmailProviderPort,
    sender: SenderIdentity,
    renderer: TemplateRenderer,
}

impl NotificationService {
    pub fn new(email_provider: DynEmailProviderPort, sender: SenderIdentity) -> AppResult<Self> {
        Ok(Self {
            email_provider,
            sender,
            renderer: TemplateRenderer::new()?,
        })
    }

    fn compose(&self, request: SendRequest) -> AppResult<OutgoingEmail> {
        let template = EmailTemplate::for_params(&request.template_params);

        let mut params = TemplateParams::from([
            (LOGO_URL_PARAM.to_string(), self.sender.logo_url.clone()),
            (SUPPORT_EMAIL_PARAM.to_string(), self.sender.from_email.clone()),
        ]);
        params.extend(request.template_params);

        let rendered = self.renderer.render(template, &params)?;

        Ok(OutgoingEmail {
            from: self.sender.mailbox(),
            to: request.recipient,
            subject: rendered.subject,
            html: rendered.html,
        })
    }
}

#[async_trait::async_trait]
impl NotificationUseCase for NotificationService {
    #[instrument(skip(self, template_params))]
    async fn send(
        &self,
        recipient: Option<String>,
        template_params: TemplateParams,
    ) -> AppResult<SendResult> {
        let request = SendRequest::parse(recipient.as_deref(), template_params)?;
        let email = self.compose(request)?;

        match self.email_provider.send_email(&email).await {
            Ok(receipt) => {
                info!(
                    recipient = %email.to,
                    message_id = %receipt.id,
                    "Email sent successfully"
                );
                Ok(SendResult::delivered(receipt.id))
            }
            Err(e) => {
                error!(
                    recipient = %email.to,
                    kind = %e.kind,
                    error = %e.message,
                    "Email send failed"
                );
                Ok(SendResult::failed(e.kind, e.message))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::ports::outgoing::email_provider::{
        EmailProviderPort, ProviderError, ProviderReceipt,
    };
    use domain::{
        error::DomainError,
        notification::{KYC_LINK_PARAM, ProviderErrorKind},
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};
    use tera::escape_html;

    struct RecordingProvider {
        outcome: Result<ProviderReceipt, ProviderError>,
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    impl RecordingProvider {
        fn new(outcome: Result<ProviderReceipt, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl EmailProviderPort for RecordingProvider {
        async fn send_email(
            &self,
            email: &OutgoingEmail,
        ) -> Result<ProviderReceipt, ProviderError> {
            self.sent.lock().unwrap().push(email.clone());
            self.outcome.clone()
        }
    }

    fn sender() -> SenderIdentity {
        SenderIdentity {
            from_name: "Celeriz".to_string(),
            from_email: "team@celeriz.com".to_string(),
            logo_url: "https://cdn.example.com/logo.png".to_string(),
        }
    }

    fn accepted() -> Result<ProviderReceipt, ProviderError> {
        Ok(ProviderReceipt {
            id: "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".to_string(),
        })
    }

    #[tokio::test]
    async fn sends_exactly_one_email_from_fixed_sender() {
        let provider = RecordingProvider::new(accepted());
        let service = NotificationService::new(provider.clone(), sender()).unwrap();

        let result = service
            .send(Some("user@example.com".to_string()), TemplateParams::new())
            .await
            .unwrap();

        assert_eq!(
            result,
            SendResult::delivered("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".to_string())
        );

        let sent = provider.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "Celeriz <team@celeriz.com>");
        assert_eq!(sent[0].to.as_str(), "user@example.com");
        assert_eq!(sent[0].subject, "Welcome to Celeriz 💸");
        assert!(sent[0].html.contains(&escape_html("https://cdn.example.com/logo.png")));
    }

    #[rstest]
    #[case(None, DomainError::MissingRecipient)]
    #[case(Some(""), DomainError::MissingRecipient)]
    #[case(Some("not-an-email"), DomainError::InvalidEmail("not-an-email".to_string()))]
    #[case(Some("user@localhost"), DomainError::InvalidEmail("user@localhost".to_string()))]
    #[case(Some("user.example.com"), DomainError::InvalidEmail("user.example.com".to_string()))]
    #[tokio::test]
    async fn invalid_input_never_reaches_provider(
        #[case] recipient: Option<&str>,
        #[case] expected: DomainError,
    ) {
        let provider = RecordingProvider::new(accepted());
        let service = NotificationService::new(provider.clone(), sender()).unwrap();

        let result = service
            .send(recipient.map(str::to_string), TemplateParams::new())
            .await;

        assert!(matches!(result, Err(AppError::Domain(ref e)) if *e == expected));
        assert!(provider.sent().is_empty());
    }

    #[rstest]
    #[case(ProviderErrorKind::Validation)]
    #[case(ProviderErrorKind::Authentication)]
    #[case(ProviderErrorKind::Unknown)]
    #[tokio::test]
    async fn provider_failures_become_failed_results(#[case] kind: ProviderErrorKind) {
        let provider = RecordingProvider::new(Err(ProviderError::new(kind, "rejected")));
        let service = NotificationService::new(provider.clone(), sender()).unwrap();

        let result = service
            .send(Some("user@example.com".to_string()), TemplateParams::new())
            .await
            .unwrap();

        assert_eq!(result, SendResult::failed(kind, "rejected".to_string()));
        assert_eq!(provider.sent().len(), 1);
    }

    #[tokio::test]
    async fn kyc_link_selects_verification_template() {
        let provider = RecordingProvider::new(accepted());
        let service = NotificationService::new(provider.clone(), sender()).unwrap();
        let params = TemplateParams::from([(
            KYC_LINK_PARAM.to_string(),
            "https://kyc.example.com/s/123".to_string(),
        )]);

        service
            .send(Some("user@example.com".to_string()), params)
            .await
            .unwrap();

        let sent = provider.sent();
        assert_eq!(sent[0].subject, "Complete your Celeriz verification");
        assert!(sent[0].html.contains(&format!(
            "href=\"{}\"",
            escape_html("https://kyc.example.com/s/123")
        )));
        assert!(sent[0].html.contains("mailto:team@celeriz.com"));
    }
}

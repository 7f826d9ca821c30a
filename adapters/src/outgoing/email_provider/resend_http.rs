//! Resend transactional email API client.

use async_trait::async_trait;
use domain::notification::ProviderErrorKind;
use mailer_application::{
    error::AppError,
    ports::outgoing::email_provider::{
        EmailProviderPort, OutgoingEmail, ProviderError, ProviderReceipt,
    },
};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

#[derive(Clone)]
pub struct ResendEmailConfig {
    pub api_key: SecretString,
    pub base_url: String,
}

#[derive(Clone)]
pub struct ResendEmailProvider {
    client: Client,
    api_key: SecretString,
    emails_url: String,
}

#[derive(Debug, Serialize)]
struct ResendSendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResendSendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorResponse {
    name: Option<String>,
    message: Option<String>,
}

impl ResendEmailProvider {
    pub fn new(config: ResendEmailConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::ExternalServiceError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ResendEmailConfig) -> Self {
        let emails_url = format!("{}/emails", config.base_url.trim_end_matches('/'));

        info!(endpoint = %emails_url, "Resend email provider initialized");

        Self {
            client,
            api_key: config.api_key,
            emails_url,
        }
    }
}

/// Maps a Resend error onto the local taxonomy. The documented `name` wins;
/// the HTTP status is the fallback when the body carries no usable name.
pub(crate) fn classify_error(status: StatusCode, name: Option<&str>) -> ProviderErrorKind {
    match name {
        Some("validation_error" | "missing_required_field" | "invalid_parameter") => {
            ProviderErrorKind::Validation
        }
        Some(
            "authentication_error" | "missing_api_key" | "invalid_api_key" | "restricted_api_key",
        ) => ProviderErrorKind::Authentication,
        _ => match status {
            StatusCode::UNPROCESSABLE_ENTITY => ProviderErrorKind::Validation,
            StatusCode::UNAUTHORIZED => ProviderErrorKind::Authentication,
            _ => ProviderErrorKind::Unknown,
        },
    }
}

#[async_trait]
impl EmailProviderPort for ResendEmailProvider {
    #[instrument(skip(self, email), fields(recipient = %email.to))]
    async fn send_email(&self, email: &OutgoingEmail) -> Result<ProviderReceipt, ProviderError> {
        let request = ResendSendEmailRequest {
            from: &email.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(&self.emails_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Resend request failed");
                ProviderError::unknown(format!("Failed to reach email provider: {}", e))
            })?;

        let status = response.status();

        if status.is_success() {
            let body: ResendSendEmailResponse = response.json().await.map_err(|e| {
                ProviderError::unknown(format!("Failed to parse provider response: {}", e))
            })?;

            debug!(message_id = %body.id, "Resend accepted email");
            return Ok(ProviderReceipt { id: body.id });
        }

        let raw_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let parsed = serde_json::from_str::<ResendErrorResponse>(&raw_body).ok();

        let name = parsed.as_ref().and_then(|p| p.name.as_deref());
        let kind = classify_error(status, name);
        let message = parsed
            .as_ref()
            .and_then(|p| p.message.clone())
            .unwrap_or(raw_body);

        error!(
            status = status.as_u16(),
            name = name.unwrap_or("unknown"),
            kind = %kind,
            "Resend rejected email"
        );

        Err(ProviderError::new(kind, message))
    }
}

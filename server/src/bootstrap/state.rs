use std::sync::Arc;

use mailer_application::error::AppError;
use mailer_application::infrastructure_config::{Config, EmailBackend};
use mailer_application::{
    config::SenderIdentity,
    notifications::service::NotificationService,
    ports::{incoming::notifications::NotificationUseCase, outgoing::email_provider::EmailProviderPort},
};
use waitlist_mailer_adapters::outgoing::email_provider::{
    console_email_provider::ConsoleEmailProvider,
    resend_http::{ResendEmailConfig, ResendEmailProvider},
};
use waitlist_mailer_adapters::shared::app_state::AppState as AdaptersAppState;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notification_service: Arc<dyn NotificationUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let email_provider = Self::create_email_provider(&config)?;
        let notification_service = Arc::new(NotificationService::new(
            email_provider,
            SenderIdentity::from(&config.sender),
        )?);

        Ok(Self {
            config,
            notification_service,
        })
    }

    fn create_email_provider(config: &Config) -> Result<Arc<dyn EmailProviderPort>, AppError> {
        let email_provider: Arc<dyn EmailProviderPort> = match config.provider.backend {
            EmailBackend::Console => Arc::new(ConsoleEmailProvider::new()),
            EmailBackend::Resend => {
                let resend_config = ResendEmailConfig {
                    api_key: config.provider.api_key.clone(),
                    base_url: config.provider.base_url.clone(),
                };
                Arc::new(ResendEmailProvider::new(resend_config)?)
            }
        };

        Ok(email_provider)
    }

    pub fn to_adapters_state(self) -> AdaptersAppState {
        AdaptersAppState::new(self.config, self.notification_service)
    }
}

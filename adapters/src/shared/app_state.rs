use std::sync::Arc;

use mailer_application::{
    infrastructure_config::Config, ports::incoming::notifications::NotificationUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notification_use_case: Arc<dyn NotificationUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        notification_use_case: Arc<dyn NotificationUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            notification_use_case,
        }
    }
}

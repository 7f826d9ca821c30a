use crate::error::AppResult;
use domain::notification::{SendResult, TemplateParams};

#[async_trait::async_trait]
pub trait NotificationUseCase: Send + Sync {
    /// Validates `recipient`, renders the matching template and makes at most
    /// one provider call. Provider failures come back as a failed
    /// [`SendResult`]; only invalid input is an `Err`.
    async fn send(
        &self,
        recipient: Option<String>,
        template_params: TemplateParams,
    ) -> AppResult<SendResult>;
}

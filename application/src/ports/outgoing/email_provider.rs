use std::sync::Arc;
use thiserror::Error;

use domain::{email::EmailAddress, notification::ProviderErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: EmailAddress,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReceipt {
    pub id: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unknown, message)
    }
}

#[async_trait::async_trait]
pub trait EmailProviderPort: Send + Sync {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<ProviderReceipt, ProviderError>;
}

pub type DynEmailProviderPort = Arc<dyn EmailProviderPort>;

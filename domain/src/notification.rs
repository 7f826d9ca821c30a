use serde::Serialize;
use std::{collections::BTreeMap, fmt};

use crate::email::EmailAddress;
use crate::error::{DomainError, DomainResult};

/// Template parameter carrying the identity-verification link.
pub const KYC_LINK_PARAM: &str = "kyc_link";

pub type TemplateParams = BTreeMap<String, String>;

/// A single dispatch request. Lives for one call and is dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub recipient: EmailAddress,
    pub template_params: TemplateParams,
}

impl SendRequest {
    #[must_use]
    pub fn new(recipient: EmailAddress, template_params: TemplateParams) -> Self {
        Self {
            recipient,
            template_params,
        }
    }

    /// Builds a request from raw caller input. An absent or empty recipient
    /// is reported separately from a malformed one.
    pub fn parse(recipient: Option<&str>, template_params: TemplateParams) -> DomainResult<Self> {
        let raw = recipient
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::MissingRecipient)?;

        Ok(Self::new(EmailAddress::parse(raw)?, template_params))
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.template_params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    Validation,
    Authentication,
    Unknown,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderErrorKind::Validation => write!(f, "validation_error"),
            ProviderErrorKind::Authentication => write!(f, "authentication_error"),
            ProviderErrorKind::Unknown => write!(f, "unknown_error"),
        }
    }
}

/// Outcome of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub succeeded: bool,
    pub provider_message_id: Option<String>,
    pub error_kind: Option<ProviderErrorKind>,
    pub error_message: Option<String>,
}

impl SendResult {
    #[must_use]
    pub fn delivered(provider_message_id: String) -> Self {
        Self {
            succeeded: true,
            provider_message_id: Some(provider_message_id),
            error_kind: None,
            error_message: None,
        }
    }

    #[must_use]
    pub fn failed(kind: ProviderErrorKind, message: String) -> Self {
        Self {
            succeeded: false,
            provider_message_id: None,
            error_kind: Some(kind),
            error_message: Some(message),
        }
    }
}

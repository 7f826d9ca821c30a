use domain::{
    error::DomainError,
    notification::{KYC_LINK_PARAM, TemplateParams},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
#[cfg(feature = "docs")]
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Request to email a waitlist sign-up. When `kycLink` is present the identity verification email is sent instead of the welcome email.",
    example = json!({
        "to": "user@example.com",
        "kycLink": "https://verify.celeriz.com/start/abc123"
    })
))]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    /// Kept as raw JSON so a non-string value is reported as a bad address.
    #[cfg_attr(
        feature = "docs",
        schema(value_type = Option<String>, example = "user@example.com")
    )]
    pub to: Option<Value>,

    #[cfg_attr(
        feature = "docs",
        schema(example = "https://verify.celeriz.com/start/abc123")
    )]
    #[validate(custom(
        function = "validate_kyc_link",
        message = "kycLink must be an http or https URL"
    ))]
    pub kyc_link: Option<String>,
}

fn validate_kyc_link(link: &str) -> Result<(), ValidationError> {
    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::new("kyc_link_scheme")),
    }
}

impl SendEmailRequest {
    /// `None` for a missing or `null` address; any other non-string is malformed.
    pub fn recipient(&self) -> Result<Option<String>, DomainError> {
        match &self.to {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(address)) => Ok(Some(address.clone())),
            Some(other) => Err(DomainError::InvalidEmail(other.to_string())),
        }
    }

    #[must_use]
    pub fn template_params(&self) -> TemplateParams {
        let mut params = TemplateParams::new();
        if let Some(link) = self.kyc_link.as_ref().filter(|link| !link.is_empty()) {
            params.insert(KYC_LINK_PARAM.to_string(), link.clone());
        }
        params
    }
}

use crate::infrastructure_config::SenderConfig;

/// Fixed sender details stamped onto every outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
    pub from_name: String,
    pub from_email: String,
    pub logo_url: String,
}

impl SenderIdentity {
    /// `Name <address>` form accepted by the provider's `from` field.
    #[must_use]
    pub fn mailbox(&self) -> String {
        if self.from_name.is_empty() {
            self.from_email.clone()
        } else {
            format!("{} <{}>", self.from_name, self.from_email)
        }
    }
}

impl From<&SenderConfig> for SenderIdentity {
    fn from(config: &SenderConfig) -> Self {
        Self {
            from_name: config.from_name.clone(),
            from_email: config.from_email.clone(),
            logo_url: config.logo_url.clone(),
        }
    }
}

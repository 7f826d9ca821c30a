use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub sender: SenderConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailBackend {
    #[serde(rename = "console")]
    Console,
    #[serde(rename = "resend")]
    Resend,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub backend: EmailBackend,
    pub api_key: SecretString,
    pub base_url: String,
}

// An unset key must serialize as empty, otherwise the defaults layer would
// hand `validate` a non-empty placeholder.
impl Serialize for ProviderConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let api_key = if self.api_key.expose_secret().is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        let mut state = serializer.serialize_struct("ProviderConfig", 3)?;
        state.serialize_field("backend", &self.backend)?;
        state.serialize_field("api_key", api_key)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ProviderConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ProviderConfigHelper {
            backend: EmailBackend,
            #[serde(default)]
            api_key: String,
            base_url: String,
        }

        let helper = ProviderConfigHelper::deserialize(deserializer)?;
        Ok(ProviderConfig {
            backend: helper.backend,
            api_key: SecretString::from(helper.api_key),
            base_url: helper.base_url,
        })
    }
}

impl ProviderConfig {
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    pub from_name: String,
    pub from_email: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub service_name: String,
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            backend: EmailBackend::Resend,
            api_key: SecretString::from(""),
            base_url: "https://api.resend.com".to_string(),
        }
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            from_name: "Celeriz".to_string(),
            from_email: "team@celeriz.com".to_string(),
            logo_url: "https://celeriz-email-list.vercel.app/images/logo.png".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
            },
            provider: ProviderConfig::default(),
            sender: SenderConfig::default(),
            logging: LoggingConfig {
                service_name: "waitlist-mailer".to_string(),
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::ConfigError {
                message: "server port must be greater than 0".to_string(),
            });
        }

        if self.sender.from_email.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "sender from_email cannot be empty".to_string(),
            });
        }

        if self.provider.backend == EmailBackend::Resend {
            if self.provider.api_key().trim().is_empty() {
                return Err(AppError::ConfigError {
                    message: "RESEND_API_KEY must be set when using the resend backend"
                        .to_string(),
                });
            }

            if let Err(e) = Url::parse(&self.provider.base_url) {
                return Err(AppError::ConfigError {
                    message: format!("provider base_url is not a valid URL: {e}"),
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_api_key(key: &str) -> Config {
        let mut config = Config::default();
        config.provider.api_key = SecretString::from(key);
        config
    }

    #[test]
    fn default_config_requires_api_key() {
        let err = Config::default().validate();
        assert!(matches!(err, Err(AppError::ConfigError { .. })));
    }

    #[test]
    fn console_backend_needs_no_key() {
        let mut config = Config::default();
        config.provider.backend = EmailBackend::Console;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn keyed_resend_config_is_valid() {
        assert!(with_api_key("re_123").validate().is_ok());
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = with_api_key("re_123");
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_base_url() {
        let mut config = with_api_key("re_123");
        config.provider.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialization_redacts_api_key() {
        let json = serde_json::to_value(with_api_key("re_super_secret")).unwrap_or_default();
        assert_eq!(json["provider"]["api_key"], "[REDACTED]");

        let json = serde_json::to_value(Config::default()).unwrap_or_default();
        assert_eq!(json["provider"]["api_key"], "");
    }

    #[test]
    fn server_address_joins_host_and_port() {
        assert_eq!(Config::default().server_address(), "0.0.0.0:3000");
    }
}

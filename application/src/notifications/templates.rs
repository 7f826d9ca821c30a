use domain::notification::{KYC_LINK_PARAM, TemplateParams};
use tera::{Context, Tera};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    Welcome,
    KycVerification,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

impl EmailTemplate {
    /// A verification link switches the message to the KYC template.
    #[must_use]
    pub fn for_params(params: &TemplateParams) -> Self {
        if params.contains_key(KYC_LINK_PARAM) {
            Self::KycVerification
        } else {
            Self::Welcome
        }
    }

    #[must_use]
    pub fn subject(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome to Celeriz 💸",
            Self::KycVerification => "Complete your Celeriz verification",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Welcome => "welcome.html",
            Self::KycVerification => "kyc_verification.html",
        }
    }
}

/// Email bodies compiled into the binary and rendered with tera. The `.html`
/// names keep tera's autoescaping on for every substituted value.
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    pub fn new() -> AppResult<Self> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    EmailTemplate::Welcome.name(),
                    include_str!("../../templates/welcome.html"),
                ),
                (
                    EmailTemplate::KycVerification.name(),
                    include_str!("../../templates/kyc_verification.html"),
                ),
            ])
            .map_err(|e| AppError::TemplateError {
                message: e.to_string(),
            })?;

        Ok(Self { engine })
    }

    pub fn render(
        &self,
        template: EmailTemplate,
        params: &TemplateParams,
    ) -> AppResult<RenderedEmail> {
        let mut context = Context::new();
        for (name, value) in params {
            context.insert(name.as_str(), value);
        }

        let html = self
            .engine
            .render(template.name(), &context)
            .map_err(|e| AppError::TemplateError {
                message: format!("Failed to render {}: {}", template.name(), e),
            })?;

        Ok(RenderedEmail {
            subject: template.subject().to_string(),
            html,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tera::escape_html;

    fn params(pairs: &[(&str, &str)]) -> TemplateParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn welcome_params() -> TemplateParams {
        params(&[
            ("logo_url", "https://cdn.example.com/logo.png"),
            ("support_email", "team@celeriz.com"),
        ])
    }

    #[test]
    fn embedded_templates_compile() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn selects_template_from_params() {
        assert_eq!(
            EmailTemplate::for_params(&TemplateParams::new()),
            EmailTemplate::Welcome
        );
        assert_eq!(
            EmailTemplate::for_params(&params(&[(KYC_LINK_PARAM, "https://kyc.example.com")])),
            EmailTemplate::KycVerification
        );
    }

    #[test]
    fn welcome_template_fills_every_placeholder() {
        let renderer = TemplateRenderer::new().unwrap();

        let rendered = renderer
            .render(EmailTemplate::Welcome, &welcome_params())
            .unwrap();

        assert_eq!(rendered.subject, "Welcome to Celeriz 💸");
        assert!(
            rendered
                .html
                .contains(&escape_html("https://cdn.example.com/logo.png"))
        );
        assert!(rendered.html.contains("mailto:team@celeriz.com"));
        assert!(!rendered.html.contains("{{"));
    }

    #[test]
    fn kyc_template_escapes_link() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut params = welcome_params();
        params.insert(
            KYC_LINK_PARAM.to_string(),
            "https://kyc.example.com/start?user=1&step=2\"><script>".to_string(),
        );

        let rendered = renderer
            .render(EmailTemplate::KycVerification, &params)
            .unwrap();

        assert_eq!(rendered.subject, "Complete your Celeriz verification");
        assert!(rendered.html.contains("user=1&amp;step=2&quot;&gt;&lt;script&gt;"));
        assert!(!rendered.html.contains("<script>"));
    }

    #[test]
    fn missing_parameter_is_a_template_error() {
        let renderer = TemplateRenderer::new().unwrap();

        let result = renderer.render(EmailTemplate::KycVerification, &welcome_params());

        assert!(matches!(result, Err(AppError::TemplateError { .. })));
    }
}

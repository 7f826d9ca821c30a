use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use mailer_application::error::{AppError, AppResult};
use mailer_application::infrastructure_config::Config;
use std::fs;
use std::path::Path;
use tracing::info;

const API_KEY_VAR: &str = "RESEND_API_KEY";
const PORT_VAR: &str = "PORT";

pub fn load_config() -> AppResult<Config> {
    generate_env_template_if_missing()?;

    let default_config = Config::default();
    let mut figment = Figment::from(Serialized::defaults(default_config));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    let config: Config = figment
        .merge(Env::prefixed("MAILER_").split("__"))
        .merge(conventional_env())
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

/// The provider's documented `RESEND_API_KEY` and the platform `PORT`
/// override their prefixed equivalents.
fn conventional_env() -> Env {
    Env::raw().only(&[API_KEY_VAR, PORT_VAR]).map(|key| {
        if key == API_KEY_VAR {
            "provider.api_key".into()
        } else {
            "server.port".into()
        }
    })
}

fn generate_env_template_if_missing() -> AppResult<()> {
    let env_file = ".env";
    let template_file = ".env.example";

    if Path::new(env_file).exists() {
        return Ok(());
    }

    if !Path::new(template_file).exists() {
        return Ok(());
    }

    fs::copy(template_file, env_file).map_err(|e| AppError::ConfigError {
        message: format!("Failed to generate .env file from template: {e}"),
    })?;

    info!("Generated .env from template. Please configure your secrets!");
    info!("IMPORTANT: .env contains sensitive data and is gitignored.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use mailer_application::infrastructure_config::{EmailBackend, LogFormat};

    #[test]
    fn conventional_variables_fill_provider_and_port() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("RESEND_API_KEY", "re_from_env");
            jail.set_env("PORT", "8080");

            let config = load_config().map_err(|e| e.to_string())?;

            assert_eq!(config.provider.api_key(), "re_from_env");
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.provider.backend, EmailBackend::Resend);
            Ok(())
        });
    }

    #[test]
    fn missing_api_key_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();

            assert!(matches!(load_config(), Err(AppError::ConfigError { .. })));
            Ok(())
        });
    }

    #[test]
    fn prefixed_variables_and_files_layer_in_order() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.toml",
                r#"
                    [server]
                    port = 4000

                    [provider]
                    backend = "console"

                    [sender]
                    from_name = "Celeriz Waitlist"
                "#,
            )?;
            jail.set_env("MAILER_LOGGING__FORMAT", "json");
            jail.set_env("MAILER_SERVER__PORT", "5000");

            let config = load_config().map_err(|e| e.to_string())?;

            assert_eq!(config.server.port, 5000);
            assert_eq!(config.provider.backend, EmailBackend::Console);
            assert_eq!(config.sender.from_name, "Celeriz Waitlist");
            assert_eq!(config.sender.from_email, "team@celeriz.com");
            assert!(matches!(config.logging.format, LogFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn env_file_is_generated_from_template() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(".env.example", "RESEND_API_KEY=\n")?;
            jail.set_env("RESEND_API_KEY", "re_from_env");

            load_config().map_err(|e| e.to_string())?;

            assert!(Path::new(".env").exists());
            Ok(())
        });
    }
}

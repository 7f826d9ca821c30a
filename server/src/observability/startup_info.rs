use mailer_application::infrastructure_config::{Config, EmailBackend};
use tracing::{info, warn};

pub fn print_api_info(config: &Config) {
    print_endpoint_info(config);
    print_provider_info(config);
}

fn print_endpoint_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 Endpoints:");
    info!("  ✉️  Send email: POST {}/api/send-email", base_url);
    info!("  💓 Health: GET {}/health", base_url);
    if cfg!(feature = "docs") {
        info!("  📖 Swagger UI: {}/docs", base_url);
    }
}

fn print_provider_info(config: &Config) {
    info!("⚙️  Configuration:");
    match config.provider.backend {
        EmailBackend::Resend => {
            info!("  📮 Provider: Resend ({})", config.provider.base_url);
        }
        EmailBackend::Console => {
            warn!("  📮 Provider: console (emails are logged, not delivered)");
        }
    }
    info!(
        "  👤 Sender: {} <{}>",
        config.sender.from_name, config.sender.from_email
    );
    info!(
        "  🌐 CORS origin: {}",
        config.server.cors_origin.as_deref().unwrap_or("*")
    );
    info!("  🏷️  Environment: {}", config.environment.env);
}

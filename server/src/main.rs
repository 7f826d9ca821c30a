use std::future;

use tokio::net::TcpListener;
use tokio::signal::{
    self,
    unix::{SignalKind, signal as unix_signal},
};
use tracing::{error, info};

use server::bootstrap::router::create_router;
use server::bootstrap::state::AppState;
use server::config_loader;
use server::observability::{self, tracing::InitError};

#[tokio::main]
async fn main() -> Result<(), InitError> {
    dotenvy::dotenv().ok();

    let config = config_loader::load_config()?;
    observability::tracing::setup_logging(&config)?;

    info!(
        service = %config.logging.service_name,
        environment = %config.environment.env,
        "Starting waitlist mailer"
    );

    let router = create_router(AppState::new(config.clone())?);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    observability::startup_info::print_api_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| error!(error = %e, "Server error"))?;

    info!("Server shutdown completed");
    Ok(())
}

/// Resolves on the first of SIGINT or SIGTERM. A signal whose handler cannot
/// be installed never resolves, so the other one still drives shutdown.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            future::pending::<()>().await;
        }
    };

    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                future::pending::<()>().await;
            }
        }
    };

    let received = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };

    info!(signal = received, "Starting graceful shutdown");
}

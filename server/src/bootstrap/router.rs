use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::bootstrap::state::AppState;
use mailer_application::infrastructure_config::Config;
use waitlist_mailer_adapters::incoming::http_axum::routes::build_application_router;

pub fn create_router(state: AppState) -> Router {
    let cors_layer = create_cors_layer(&state.config);
    let adapters_state = state.to_adapters_state();

    build_application_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(adapters_state)
}

fn create_cors_layer(config: &Config) -> CorsLayer {
    let base_cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([HeaderName::from_static("content-type")]);

    match &config.server.cors_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => base_cors.allow_origin(origin),
            Err(_) => {
                warn!(origin = %origin, "Invalid CORS origin, allowing any origin");
                base_cors.allow_origin(Any)
            }
        },
        None => base_cors.allow_origin(Any),
    }
}

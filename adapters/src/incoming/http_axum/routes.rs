use axum::{
    Router,
    routing::{get, post},
};
#[cfg(feature = "docs")]
use utoipa::OpenApi;
#[cfg(feature = "docs")]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::docs::ApiDoc;
use crate::incoming::http_axum::{
    handlers::{health::health_check, send_email::send_email_handler},
    router_ext::RouterExt,
};
use crate::shared::app_state::AppState;

pub fn build_application_router() -> Router<AppState> {
    let router = Router::new()
        .route("/api/send-email", post(send_email_handler))
        .route("/health", get(health_check));

    #[cfg(feature = "docs")]
    let router =
        router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    router.with_request_guards()
}

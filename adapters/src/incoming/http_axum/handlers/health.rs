use axum::{Json, extract::State};
#[cfg(feature = "docs")]
use serde_json::json;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::dto::responses::ApiResponse;
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponseValue,
         example = json!({
             "success": true,
             "data": {
                 "status": "ok",
                 "environment": "development"
             }
         })
        )
    ),
    tag = "system",
    summary = "Liveness check",
    description = "Reports that the HTTP server is accepting requests. Does not contact the email provider.",
    operation_id = "health_check"
))]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success_with_data(
        None,
        Some(serde_json::json!({
            "status": "ok",
            "environment": state.config.environment.env,
        })),
    ))
}

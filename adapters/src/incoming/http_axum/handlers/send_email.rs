#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::common_responses::{
    BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse,
    ValidationErrorResponse,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::notification::{ProviderErrorKind, SendResult};
use mailer_application::error::AppError;
#[cfg(feature = "docs")]
use serde_json::json;
use tracing::{debug, warn};
use validator::Validate;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseSentEmail;
use crate::{
    incoming::http_axum::{
        dto::{
            requests::SendEmailRequest,
            responses::{ApiResponse, SentEmailResponse},
        },
        error_mapper::HttpError,
    },
    shared::app_state::AppState,
};

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/api/send-email",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Email accepted by the provider", body = ApiResponseSentEmail,
         example = json!({
             "success": true,
             "message": "Email sent successfully",
             "data": { "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794" }
         })
        ),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "email",
    summary = "Send a waitlist email",
    description = "Validates the recipient address, renders the welcome (or KYC verification) template and submits it to the email provider. At most one provider call is made per request."
))]
pub async fn send_email_handler(
    State(state): State<AppState>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected send-email body");
        HttpError(AppError::ValidationError {
            message: "Invalid JSON body".to_string(),
        })
    })?;

    if let Err(e) = request.validate() {
        return Err(HttpError(AppError::ValidationError {
            message: format!("Validation failed: {}", e),
        }));
    }

    let recipient = request.recipient().map_err(AppError::from)?;
    let result = state
        .notification_use_case
        .send(recipient, request.template_params())
        .await?;

    Ok(send_result_response(result))
}

/// Translates a dispatch outcome into the caller-facing status and body.
pub(crate) fn send_result_response(result: SendResult) -> Response {
    if result.succeeded {
        return (
            StatusCode::OK,
            Json(ApiResponse::success_with_data(
                Some("Email sent successfully".to_string()),
                Some(SentEmailResponse {
                    id: result.provider_message_id,
                }),
            )),
        )
            .into_response();
    }

    let (status_code, message) = match result.error_kind {
        Some(ProviderErrorKind::Validation) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Invalid email address or domain",
        ),
        Some(ProviderErrorKind::Authentication) => (
            StatusCode::UNAUTHORIZED,
            "Authentication failed. Please check your API key.",
        ),
        Some(ProviderErrorKind::Unknown) | None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send email. Please try again later.",
        ),
    };

    warn!(
        status = status_code.as_u16(),
        provider_error = result.error_message.as_deref().unwrap_or_default(),
        "Email dispatch failed"
    );

    (status_code, Json(ApiResponse::<()>::failure(message))).into_response()
}

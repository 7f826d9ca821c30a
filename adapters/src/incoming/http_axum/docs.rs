use crate::incoming::http_axum::{dto, handlers};
use dto::common_responses::{
    BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse,
    ValidationErrorResponse,
};
use dto::requests::SendEmailRequest;
use dto::responses::{ApiResponseSentEmail, ApiResponseValue, SentEmailResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::send_email::send_email_handler,
        handlers::health::health_check,
    ),
    components(
        schemas(
            SendEmailRequest,
            SentEmailResponse,
            ApiResponseSentEmail,
            ApiResponseValue
        ),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            ValidationErrorResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "email", description = "Waitlist email dispatch - validate a sign-up address and send the welcome or verification email through the configured provider"),
        (name = "system", description = "System health and status monitoring")
    ),
    info(
        title = "Celeriz Waitlist Mailer API",
        description = "Accepts waitlist sign-ups, validates the address shape and sends a templated email through the transactional email provider. One provider call per request, no retries.",
        contact(
            name = "Celeriz",
        ),
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
    )
)]
pub struct ApiDoc;

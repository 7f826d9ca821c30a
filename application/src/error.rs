use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("External service error: {message}")]
    ExternalServiceError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;

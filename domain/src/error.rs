use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Email address is required")]
    MissingRecipient,

    #[error("Invalid email format")]
    InvalidEmail(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

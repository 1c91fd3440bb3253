use thiserror::Error;

use crate::domain::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Activation e-mail could not be delivered")]
    EmailDelivery(#[from] MailError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Unique constraint violated")]
    Conflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Error)]
#[error("Mail transport failure: {0}")]
pub struct MailError(pub String);

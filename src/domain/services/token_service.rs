use crate::domain::{error::DomainError, models::account::ActivationToken};

/// Produces opaque activation tokens from cryptographically strong
/// randomness. No uniqueness guarantee beyond the randomness itself.
pub trait ActivationTokenGenerator: Clone {
    fn generate(&self) -> Result<ActivationToken, DomainError>;
}

use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::account::Account};

/// Read side of the account store, used as the pre-flight uniqueness check
/// during e-mail validation.
#[async_trait]
pub trait UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;
}

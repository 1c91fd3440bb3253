use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::account::Account};

/// Transactional write side of the account store.
///
/// The usecase drives the transaction explicitly so the activation mail can
/// be dispatched between insert and commit: the inserted row stays invisible
/// to other readers until `commit`, and `rollback` undoes it entirely.
#[async_trait]
pub trait UserRegistrationRepository {
    type Tx: Send;

    async fn begin(&self) -> Result<Self::Tx, RepositoryError>;

    /// Insert the account inside the open transaction. A unique-constraint
    /// violation on the e-mail column maps to `RepositoryError::Conflict`.
    async fn insert_account(
        &self,
        account: &Account,
        tx: &Self::Tx,
    ) -> Result<(), RepositoryError>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), RepositoryError>;

    async fn rollback(&self, tx: Self::Tx) -> Result<(), RepositoryError>;
}

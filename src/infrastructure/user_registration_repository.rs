use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DatabaseTransaction, EntityTrait, SqlErr,
    TransactionTrait,
};

use crate::domain::{
    error::RepositoryError, models::account::Account,
    repositories::user_registration_repository::UserRegistrationRepository,
};
use crate::infrastructure::entities::users;

#[derive(Clone)]
pub struct PostgresUserRegistrationRepository {
    db: DatabaseConnection,
}

impl PostgresUserRegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRegistrationRepository for PostgresUserRegistrationRepository {
    type Tx = DatabaseTransaction;

    async fn begin(&self) -> Result<DatabaseTransaction, RepositoryError> {
        self.db
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert_account(
        &self,
        account: &Account,
        tx: &DatabaseTransaction,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = users::ActiveModel {
            id: Set(*account.id().as_uuid()),
            username: Set(account.username().to_string()),
            email: Set(account.email().to_string()),
            password_hash: Set(account.password_hash().as_str().to_string()),
            activation_token: Set(account.activation_token().as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        users::Entity::insert(model)
            .exec(tx)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::Conflict,
                _ => RepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(())
    }

    async fn commit(&self, tx: DatabaseTransaction) -> Result<(), RepositoryError> {
        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn rollback(&self, tx: DatabaseTransaction) -> Result<(), RepositoryError> {
        tx.rollback()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }
}

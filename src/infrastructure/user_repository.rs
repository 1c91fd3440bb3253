use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::{
    error::RepositoryError,
    models::{
        account::{Account, ActivationToken, UserId},
        credential::HashedPassword,
    },
    repositories::user_repository::UserRepository,
};
use crate::infrastructure::entities::users;

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|model| {
            Account::reconstruct(
                UserId::from_uuid(model.id),
                model.username,
                model.email,
                HashedPassword::new(model.password_hash),
                ActivationToken::new(model.activation_token),
            )
        }))
    }
}

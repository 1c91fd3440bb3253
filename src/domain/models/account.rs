use uuid::Uuid;

use crate::domain::models::credential::HashedPassword;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque random credential mailed to the user; consumed by the (external)
/// activation confirmation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationToken(String);

impl ActivationToken {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A registered account as persisted in storage. Assembled once by the
/// registration usecase from validated input; never mutated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: UserId,
    username: String,
    email: String,
    password_hash: HashedPassword,
    activation_token: ActivationToken,
}

impl Account {
    pub fn new(
        username: String,
        email: String,
        password_hash: HashedPassword,
        activation_token: ActivationToken,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            activation_token,
        }
    }

    pub fn reconstruct(
        id: UserId,
        username: String,
        email: String,
        password_hash: HashedPassword,
        activation_token: ActivationToken,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            activation_token,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
    pub fn activation_token(&self) -> &ActivationToken {
        &self.activation_token
    }
}

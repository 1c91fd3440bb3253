use tracing::warn;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::account::Account,
    repositories::{
        user_registration_repository::UserRegistrationRepository, user_repository::UserRepository,
    },
    services::{
        mail_service::ActivationMailer, password_service::PasswordHasher,
        token_service::ActivationTokenGenerator,
    },
    validation::{
        EMAIL_INUSE, Field, ValidationErrors, validate_email_syntax, validate_password,
        validate_username,
    },
};

/// Raw registration input as received at the boundary; any field may be
/// absent.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

struct ValidatedRegistration {
    username: String,
    email: String,
    password: String,
}

pub struct RegisterUserUsecase<
    U: UserRepository,
    R: UserRegistrationRepository,
    P: PasswordHasher,
    T: ActivationTokenGenerator,
    M: ActivationMailer,
> {
    user_repository: U,
    registration_repository: R,
    password_hasher: P,
    token_generator: T,
    mailer: M,
}

impl<
    U: UserRepository,
    R: UserRegistrationRepository,
    P: PasswordHasher,
    T: ActivationTokenGenerator,
    M: ActivationMailer,
> RegisterUserUsecase<U, R, P, T, M>
{
    pub fn new(
        user_repository: U,
        registration_repository: R,
        password_hasher: P,
        token_generator: T,
        mailer: M,
    ) -> Self {
        Self {
            user_repository,
            registration_repository,
            password_hasher,
            token_generator,
            mailer,
        }
    }

    /// Register a new account: validate, hash, persist and notify inside
    /// one transaction. The account row becomes visible only if the
    /// activation mail was handed to the transport.
    pub async fn register(&self, form: RegistrationForm) -> Result<Account, DomainError>
    where
        U: Send + Sync,
        R: Send + Sync,
        P: Send + Sync,
        T: Send + Sync,
        M: Send + Sync,
    {
        let validated = self.validate(form).await?;

        // No I/O between here and the transaction: a failure leaves nothing
        // behind.
        let password_hash = self.password_hasher.hash(&validated.password)?;
        let activation_token = self.token_generator.generate()?;
        let account = Account::new(
            validated.username,
            validated.email,
            password_hash,
            activation_token,
        );

        let tx = self.registration_repository.begin().await?;

        if let Err(err) = self.registration_repository.insert_account(&account, &tx).await {
            self.registration_repository.rollback(tx).await?;
            // The unique constraint is the authority on e-mail uniqueness;
            // a conflict lost the race against the pre-flight check.
            return Err(match err {
                RepositoryError::Conflict => {
                    DomainError::Validation(ValidationErrors::single(Field::Email, EMAIL_INUSE))
                }
                other => DomainError::Repository(other),
            });
        }

        match self
            .mailer
            .send_account_activation(account.email(), account.activation_token().as_str())
            .await
        {
            Ok(()) => {
                self.registration_repository.commit(tx).await?;
                Ok(account)
            }
            Err(err) => {
                warn!(error = %err, "activation e-mail failed, rolling back registration");
                self.registration_repository.rollback(tx).await?;
                Err(DomainError::EmailDelivery(err))
            }
        }
    }

    /// Run all three field rule chains, collecting the first failing key of
    /// each. The repository is consulted for the in-use check only when the
    /// syntactic e-mail check passed.
    async fn validate(&self, form: RegistrationForm) -> Result<ValidatedRegistration, DomainError>
    where
        U: Send + Sync,
    {
        let mut errors = ValidationErrors::new();

        let username = match validate_username(form.username.as_deref()) {
            Some(key) => {
                errors.push(Field::Username, key);
                None
            }
            None => form.username,
        };

        let email = match validate_email_syntax(form.email.as_deref()) {
            Some(key) => {
                errors.push(Field::Email, key);
                None
            }
            None => {
                if let Some(value) = &form.email {
                    if self.user_repository.find_by_email(value).await?.is_some() {
                        errors.push(Field::Email, EMAIL_INUSE);
                    }
                }
                form.email
            }
        };

        let password = match validate_password(form.password.as_deref()) {
            Some(key) => {
                errors.push(Field::Password, key);
                None
            }
            None => form.password,
        };

        match (username, email, password) {
            (Some(username), Some(email), Some(password)) if errors.is_empty() => {
                Ok(ValidatedRegistration {
                    username,
                    email,
                    password,
                })
            }
            _ => Err(DomainError::Validation(errors)),
        }
    }
}
